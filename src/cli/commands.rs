// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// The file names are always asked for interactively; the flags
// only move the directories the tool reads from and writes to.
// Every default matches the layout the tool expects:
//
//   inputs/                  ← text files to tokenize
//   output/                  ← token dumps
//   models/en-token.model    ← pretrained tokenizer
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;
use std::path::PathBuf;

use crate::application::tokenize_use_case::PipelineConfig;

/// Filesystem layout flags
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Directory the input file names are resolved against
    #[arg(long, default_value = "inputs")]
    pub inputs_dir: PathBuf,

    /// Directory the output file name is resolved against
    #[arg(long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Pretrained tokenizer model (HuggingFace tokenizer JSON)
    #[arg(long, default_value = "models/en-token.model")]
    pub model: PathBuf,
}

/// The application layer never sees clap types.
impl From<LayoutArgs> for PipelineConfig {
    fn from(a: LayoutArgs) -> Self {
        PipelineConfig {
            inputs_dir: a.inputs_dir,
            output_dir: a.output_dir,
            model_path: a.model,
        }
    }
}
