// ============================================================
// Layer 3 — Batch Request and Run Summary
// ============================================================
// A BatchRequest is what the user typed at the two prompts:
// one output file name and a list of input file names.
//
// Input names are split on single spaces, exactly as typed.
// "a.txt  b.txt" yields ["a.txt", "", "b.txt"], and a file
// name containing a space cannot be expressed. The empty name
// resolves to the input directory itself, which is not a
// regular file, so it is reported as missing and skipped.
//
// Reference: Rust Book §8 (Strings), §5 (Structs)

use std::path::{Path, PathBuf};

/// Parameters for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    /// Output file name, relative to the output directory
    pub output_name: String,

    /// Input file names in the order they were listed
    pub input_names: Vec<String>,
}

impl BatchRequest {
    pub fn new(output_name: impl Into<String>, input_names: Vec<String>) -> Self {
        Self {
            output_name: output_name.into(),
            input_names,
        }
    }

    /// Build a request from the raw console line of input names.
    pub fn from_line(output_name: impl Into<String>, input_line: &str) -> Self {
        Self::new(output_name, split_input_names(input_line))
    }
}

/// Split a console line into file names on single space characters.
pub fn split_input_names(line: &str) -> Vec<String> {
    line.split(' ').map(str::to_string).collect()
}

/// Join `name` under `dir` the way string concatenation would,
/// so an absolute-looking name still lands inside `dir`.
pub fn resolve_under(dir: &Path, name: &str) -> PathBuf {
    dir.join(name.trim_start_matches(std::path::is_separator))
}

/// What a successful run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the tokens were written
    pub output_path: PathBuf,

    /// Input files that were tokenized, in order
    pub processed: Vec<PathBuf>,

    /// Input paths that did not reference a regular file
    pub skipped: Vec<PathBuf>,

    /// Total number of token lines written
    pub tokens_written: usize,
}

impl RunSummary {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}
