// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline never names a concrete tokenizer or logger.
// It is generic over these traits:
//
//   TokenizerLoader → loads a model from a path
//     - HfTokenizerLoader (infra) → HuggingFace tokenizers JSON
//     - test fakes                → deterministic splitting
//
//   TokenizerModel  → turns text into tokens, then is released
//
//   Reporter        → receives info / warning / error messages
//     - TracingReporter (infra) → forwards to `tracing`
//     - test fakes              → record messages for assertions
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::Path;

// ─── TokenizerLoader ──────────────────────────────────────────────────────────
/// Anything that can load a tokenizer model from disk.
pub trait TokenizerLoader {
    type Model: TokenizerModel;

    /// Load the model stored at `path`.
    /// Fails if the file is missing or malformed.
    fn load(&self, path: &Path) -> Result<Self::Model>;
}

// ─── TokenizerModel ───────────────────────────────────────────────────────────
/// A loaded tokenizer model.
pub trait TokenizerModel {
    /// Split `text` into tokens, in order.
    /// Assumed deterministic for the same model and input.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Release whatever the model holds.
    /// Called exactly once, by the pipeline, at the end of a run.
    fn release(&mut self) -> Result<()>;
}

// ─── Reporter ─────────────────────────────────────────────────────────────────
/// Sink for the diagnostics a run produces.
pub trait Reporter {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}
