// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction:
//   1. clap parses the (optional) layout flags
//   2. the two prompts collect the output and input file names
//   3. the run itself is delegated to Layer 2
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;
pub mod prompt;

use anyhow::Result;
use clap::Parser;
use std::io;

use commands::LayoutArgs;
use crate::application::tokenize_use_case::TokenizeUseCase;
use crate::infra::{reporter::TracingReporter, tokenizer_store::HfTokenizerLoader};

#[derive(Parser, Debug)]
#[command(
    name = "text-tokenize",
    version,
    about = "Tokenize text files with a pretrained model, one token per line."
)]
pub struct Cli {
    #[command(flatten)]
    pub layout: LayoutArgs,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let request = {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut output = io::stdout();
            prompt::collect_request(&mut input, &mut output)?
        };

        let reporter = TracingReporter;
        let use_case = TokenizeUseCase::new(self.layout.into(), HfTokenizerLoader, &reporter);
        let summary = use_case.run(&request)?;

        println!(
            "Processed {} file(s), skipped {}, wrote {} token(s) to {}",
            summary.processed.len(),
            summary.skipped.len(),
            summary.tokens_written,
            summary.output_path.display()
        );
        Ok(())
    }
}
