// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types and traits describing a tokenization run.
//
// Rules for this layer:
//   - NO tokenizers crate types allowed here
//   - NO file I/O or console access
//   - Only plain structs, enums, and traits
//
// The pipeline in Layer 2 is written against these traits, so
// tests can swap the real tokenizer and logger for fakes.
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The request collected from the console and the run summary
pub mod batch;

// Error taxonomy for a pipeline run
pub mod error;

// Capabilities the pipeline depends on (tokenizer, reporter)
pub mod traits;
