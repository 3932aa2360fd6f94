// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates a tokenization run against the domain traits.
//
// Rules for this layer:
//   - No console prompting here (that's Layer 1)
//   - No tokenizers crate types (that's Layer 6)
//   - Diagnostics go through the injected Reporter
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The batch tokenization workflow
pub mod tokenize_use_case;

// Scoped ownership and release of the tokenizer model
pub mod model_guard;

#[cfg(test)]
pub mod test_support;
