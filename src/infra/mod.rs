// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concrete implementations of the domain traits:
//
//   tokenizer_store.rs — HuggingFace `tokenizers` model loading
//                        and tokenisation (TokenizerLoader,
//                        TokenizerModel)
//
//   reporter.rs        — Reporter that forwards to `tracing`
//
// Only this layer imports the tokenizers crate.
//
// Reference: Rust Book §7 (Modules)

/// Tokenizer model loading and tokenisation
pub mod tokenizer_store;

/// `tracing`-backed diagnostics sink
pub mod reporter;
