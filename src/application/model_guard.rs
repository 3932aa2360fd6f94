// ============================================================
// Layer 2 — Model Guard
// ============================================================
// Owns the loaded tokenizer model for the length of a run and
// releases it when dropped, on the success path and on every
// early return. The `released` flag keeps the release to
// exactly once. A failed release is reported at error level
// and otherwise ignored.
//
// Reference: Rust Book §15 (Running Code on Cleanup with Drop)

use crate::domain::traits::{Reporter, TokenizerModel};

pub struct ModelGuard<'a, M: TokenizerModel> {
    model: M,
    released: bool,
    reporter: &'a dyn Reporter,
}

impl<'a, M: TokenizerModel> ModelGuard<'a, M> {
    pub fn new(model: M, reporter: &'a dyn Reporter) -> Self {
        Self { model, released: false, reporter }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Release the model now instead of waiting for drop.
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(e) = self.model.release() {
            self.reporter
                .error(&format!("failed to release tokenizer model: {e:#}"));
        }
    }
}

impl<M: TokenizerModel> Drop for ModelGuard<'_, M> {
    fn drop(&mut self) {
        self.release_inner();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{FakeModel, RecordingReporter};

    #[test]
    fn test_drop_releases_once() {
        let reporter = RecordingReporter::default();
        let model = FakeModel::default();
        let releases = model.releases.clone();

        {
            let _guard = ModelGuard::new(model, &reporter);
        }
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_explicit_release_does_not_release_again_on_drop() {
        let reporter = RecordingReporter::default();
        let model = FakeModel::default();
        let releases = model.releases.clone();

        let guard = ModelGuard::new(model, &reporter);
        assert_eq!(guard.model().tokenize("a b").unwrap(), vec!["a", "b"]);
        guard.release();
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_release_failure_is_logged() {
        let reporter = RecordingReporter::default();
        let model = FakeModel {
            fail_release: true,
            ..FakeModel::default()
        };

        drop(ModelGuard::new(model, &reporter));
        let errors = reporter.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("failed to release tokenizer model"));
    }
}
