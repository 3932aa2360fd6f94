// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads a pretrained tokenizer from disk using the HuggingFace
// `tokenizers` crate and exposes it through the domain traits.
//
// The model file is a tokenizer JSON document, the format
// Tokenizer::from_file() expects. Text is encoded WITHOUT
// special tokens, so no [CLS]/[SEP] markers leak into the
// output, and each token's string form is returned as-is.
//
// Reference: tokenizers crate documentation

use anyhow::{anyhow, Result};
use std::path::Path;
use tokenizers::Tokenizer;

use crate::domain::traits::{TokenizerLoader, TokenizerModel};

/// Loads `tokenizers` JSON models.
#[derive(Debug, Default, Clone, Copy)]
pub struct HfTokenizerLoader;

impl TokenizerLoader for HfTokenizerLoader {
    type Model = HfTokenizerModel;

    fn load(&self, path: &Path) -> Result<HfTokenizerModel> {
        // from_file reports a missing file and a malformed one the same way
        let tokenizer = Tokenizer::from_file(path)
            .map_err(|e| anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e))?;

        tracing::debug!("Loaded tokenizer model from '{}'", path.display());
        Ok(HfTokenizerModel { tokenizer: Some(tokenizer) })
    }
}

/// A loaded `tokenizers` model.
/// `None` once released.
pub struct HfTokenizerModel {
    tokenizer: Option<Tokenizer>,
}

impl TokenizerModel for HfTokenizerModel {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokenizer = self
            .tokenizer
            .as_ref()
            .ok_or_else(|| anyhow!("Tokenizer model has already been released"))?;

        let encoding = tokenizer
            .encode(text, false)
            .map_err(|e| anyhow!("Tokenisation error: {e}"))?;

        Ok(encoding.get_tokens().to_vec())
    }

    fn release(&mut self) -> Result<()> {
        self.tokenizer = None;
        Ok(())
    }
}
