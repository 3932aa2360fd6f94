// ============================================================
// Layer 1 — Interactive Prompts
// ============================================================
// Asks for the two run parameters, in order:
//   1. the output file name
//   2. the input file names, separated by single spaces
//
// Generic over BufRead / Write so tests can drive it with
// in-memory buffers instead of a terminal.

use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

use crate::domain::batch::BatchRequest;

pub const OUTPUT_PROMPT: &str = "Enter the output file name (e.g. output.txt): ";
pub const INPUTS_PROMPT: &str = "Enter the input file names separated by spaces: ";

/// Prompt for and read a BatchRequest.
pub fn collect_request<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<BatchRequest> {
    let output_name = ask(input, output, OUTPUT_PROMPT).context("Cannot read the output file name")?;
    let input_line = ask(input, output, INPUTS_PROMPT).context("Cannot read the input file names")?;

    Ok(BatchRequest::from_line(output_name, &input_line))
}

/// Print `prompt`, then read one line without its terminator.
fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("unexpected end of input");
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
