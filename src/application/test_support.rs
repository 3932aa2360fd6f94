//! Deterministic fakes for the domain traits, used by the unit tests.

use anyhow::{anyhow, Result};
use std::cell::{Cell, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::domain::traits::{Reporter, TokenizerLoader, TokenizerModel};

/// Splits text into runs of alphanumerics and single punctuation
/// characters, dropping whitespace. "Hello world." → Hello, world, .
#[derive(Debug, Default, Clone)]
pub struct FakeModel {
    pub releases: Rc<Cell<usize>>,
    pub fail_release: bool,
    /// Tokenizing text containing this marker fails
    pub fail_on: Option<String>,
}

impl TokenizerModel for FakeModel {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        if let Some(marker) = &self.fail_on {
            if text.contains(marker.as_str()) {
                return Err(anyhow!("cannot tokenize text containing {marker:?}"));
            }
        }

        let mut tokens = Vec::new();
        let mut word = String::new();
        for c in text.chars() {
            if c.is_alphanumeric() {
                word.push(c);
                continue;
            }
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
            if !c.is_whitespace() {
                tokens.push(c.to_string());
            }
        }
        if !word.is_empty() {
            tokens.push(word);
        }
        Ok(tokens)
    }

    fn release(&mut self) -> Result<()> {
        self.releases.set(self.releases.get() + 1);
        if self.fail_release {
            return Err(anyhow!("handle already closed"));
        }
        Ok(())
    }
}

/// Hands out clones of `model`, or fails when `fail` is set.
/// Records every path it was asked to load.
#[derive(Debug, Default)]
pub struct FakeLoader {
    pub model: FakeModel,
    pub fail: bool,
    pub loaded: RefCell<Vec<PathBuf>>,
}

impl TokenizerLoader for FakeLoader {
    type Model = FakeModel;

    fn load(&self, path: &Path) -> Result<FakeModel> {
        self.loaded.borrow_mut().push(path.to_path_buf());
        if self.fail {
            return Err(anyhow!("malformed model"));
        }
        Ok(self.model.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Keeps every message it receives.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub messages: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    fn at(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.at(Level::Info)
    }

    pub fn warnings(&self) -> Vec<String> {
        self.at(Level::Warn)
    }

    pub fn errors(&self) -> Vec<String> {
        self.at(Level::Error)
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.messages.borrow_mut().push((Level::Info, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push((Level::Warn, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages.borrow_mut().push((Level::Error, message.to_string()));
    }
}
