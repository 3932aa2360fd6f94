// ============================================================
// Layer 2 — TokenizeUseCase
// ============================================================
// Runs one batch, in order:
//
//   Step 1: Resolve the output path        (output_dir + name)
//   Step 2: Load the tokenizer model       (fatal on failure)
//   Step 3: Create / truncate the output file
//   Step 4: For each input name, in order:
//             - resolve it under inputs_dir
//             - missing → warn and skip
//             - read, tokenize, write one token per line
//   Step 5: Release the model              (ModelGuard, always)
//   Step 6: Report completion
//
// A missing input file only produces a warning. Any read,
// tokenize, or write failure on the way aborts the rest of the
// batch; the model is still released before the error is
// reported and returned.
//
// Reference: Rust Book §9 (Error Handling), §12 (I/O)

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::application::model_guard::ModelGuard;
use crate::domain::batch::{resolve_under, BatchRequest, RunSummary};
use crate::domain::error::{error_chain, PipelineError, Result};
use crate::domain::traits::{Reporter, TokenizerLoader, TokenizerModel};

// ─── Pipeline Configuration ──────────────────────────────────────────────────
// Where inputs, outputs, and the model live.
// The defaults are the fixed layout the tool expects to be run from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub inputs_dir: PathBuf,
    pub output_dir: PathBuf,
    pub model_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            inputs_dir: PathBuf::from("inputs"),
            output_dir: PathBuf::from("output"),
            model_path: PathBuf::from("models/en-token.model"),
        }
    }
}

// ─── TokenizeUseCase ──────────────────────────────────────────────────────────
pub struct TokenizeUseCase<'a, L: TokenizerLoader> {
    config: PipelineConfig,
    loader: L,
    reporter: &'a dyn Reporter,
}

impl<'a, L: TokenizerLoader> TokenizeUseCase<'a, L> {
    pub fn new(config: PipelineConfig, loader: L, reporter: &'a dyn Reporter) -> Self {
        Self { config, loader, reporter }
    }

    /// Tokenize every file in `request` into the requested output file.
    pub fn run(&self, request: &BatchRequest) -> Result<RunSummary> {
        let outcome = self.execute(request);

        match &outcome {
            Ok(summary) => self.reporter.info(&format!(
                "Tokenization complete. Results saved to {}",
                summary.output_path.display()
            )),
            Err(e) => self
                .reporter
                .error(&format!("Tokenization aborted: {}", error_chain(e))),
        }

        outcome
    }

    fn execute(&self, request: &BatchRequest) -> Result<RunSummary> {
        let cfg = &self.config;

        // ── Step 1: Resolve the output path ───────────────────────────────────
        let output_path = resolve_under(&cfg.output_dir, &request.output_name);

        // ── Step 2: Load the tokenizer model ──────────────────────────────────
        // Nothing has been created or read yet if this fails
        self.reporter.info(&format!(
            "Loading tokenizer model from '{}'",
            cfg.model_path.display()
        ));
        let model = self
            .loader
            .load(&cfg.model_path)
            .map_err(|e| PipelineError::ModelLoad {
                path: cfg.model_path.clone(),
                reason: format!("{e:#}"),
            })?;

        // ── Step 5 (deferred): release on every exit path ─────────────────────
        let guard = ModelGuard::new(model, self.reporter);

        // ── Steps 3 and 4 ─────────────────────────────────────────────────────
        let summary = self.write_batch(guard.model(), &output_path, &request.input_names)?;

        guard.release();
        Ok(summary)
    }

    /// Open the output file and stream every input's tokens into it.
    fn write_batch<M: TokenizerModel>(
        &self,
        model: &M,
        output_path: &Path,
        input_names: &[String],
    ) -> Result<RunSummary> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| write_error(output_path, e))?;
            }
        }

        // File::create truncates an existing file
        let file = File::create(output_path).map_err(|e| write_error(output_path, e))?;
        let mut writer = BufWriter::new(file);
        let mut summary = RunSummary::new(output_path);

        for name in input_names {
            let input_path = resolve_under(&self.config.inputs_dir, name);

            if !input_path.is_file() {
                self.reporter
                    .warn(&format!("{} not found, skipping", input_path.display()));
                summary.skipped.push(input_path);
                continue;
            }

            let content = fs::read_to_string(&input_path).map_err(|source| PipelineError::Read {
                path: input_path.clone(),
                source,
            })?;

            let tokens = model
                .tokenize(&content)
                .map_err(|e| PipelineError::Tokenize {
                    path: input_path.clone(),
                    reason: format!("{e:#}"),
                })?;

            for token in &tokens {
                writeln!(writer, "{token}").map_err(|e| write_error(output_path, e))?;
            }

            self.reporter.info(&format!(
                "Tokenized {} ({} tokens)",
                input_path.display(),
                tokens.len()
            ));
            summary.tokens_written += tokens.len();
            summary.processed.push(input_path);
        }

        writer.flush().map_err(|e| write_error(output_path, e))?;
        Ok(summary)
    }
}

fn write_error(path: &Path, source: io::Error) -> PipelineError {
    PipelineError::Write {
        path: path.to_path_buf(),
        source,
    }
}
