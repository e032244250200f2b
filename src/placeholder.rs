//! Deferred output through placeholder tokens.
//!
//! Markup for a page location is often known only after that location has been
//! written: a template can reference a script *after* the point where scripts are
//! rendered. [`PlaceholderTracker`] solves this in two steps:
//!
//! 1. [`insert_placeholder`](PlaceholderTracker::insert_placeholder) stores a producer
//!    and returns a unique token to write into the output now
//! 2. [`replace_placeholders`](PlaceholderTracker::replace_placeholders) runs once over
//!    the finished output, left to right, replacing each token with what its producer
//!    returns at that moment
//!
//! Tokens look like `__ASSETREF_PLACEHOLDER_<32 hex digits>__`.

use anyhow::Result;
use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::constants::{PLACEHOLDER_PREFIX, PLACEHOLDER_SUFFIX};

/// Matches any well-formed placeholder token.
#[allow(clippy::expect_used)] // Built from escaped constants, always valid
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{}[0-9a-f]{{32}}{}",
        regex::escape(PLACEHOLDER_PREFIX),
        regex::escape(PLACEHOLDER_SUFFIX)
    ))
    .expect("valid placeholder pattern")
});

/// A deferred markup producer.
pub type Producer = Box<dyn FnOnce() -> Result<String>>;

/// Document-level registry of pending placeholders.
///
/// Shared by reference (`Rc<PlaceholderTracker>`) between the collectors writing into
/// one document; insertion takes `&self`.
#[derive(Default)]
pub struct PlaceholderTracker {
    producers: RefCell<HashMap<String, Producer>>,
}

impl PlaceholderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a token for output that `producer` will supply at finalization.
    pub fn insert_placeholder<F>(&self, producer: F) -> String
    where
        F: FnOnce() -> Result<String> + 'static,
    {
        let token = format!(
            "{PLACEHOLDER_PREFIX}{}{PLACEHOLDER_SUFFIX}",
            uuid::Uuid::new_v4().simple()
        );
        self.producers.borrow_mut().insert(token.clone(), Box::new(producer));
        tracing::debug!("Inserted placeholder {}", token);
        token
    }

    /// Number of producers that have not run yet.
    pub fn pending(&self) -> usize {
        self.producers.borrow().len()
    }

    /// Replace every known token in `text` with its producer's output.
    ///
    /// The scan is a single left-to-right pass, so tokens inside producer output are
    /// not expanded. Each producer runs at most once: a token seen a second time, or
    /// one this tracker never issued, is left in place.
    ///
    /// # Errors
    ///
    /// Returns the first error a producer returns.
    pub fn replace_placeholders(&self, text: &str) -> Result<String> {
        let mut result = String::with_capacity(text.len());
        let mut last = 0;
        let mut replaced = 0;

        for found in TOKEN_PATTERN.find_iter(text) {
            result.push_str(&text[last..found.start()]);
            last = found.end();

            // Release the borrow before running the producer.
            let producer = self.producers.borrow_mut().remove(found.as_str());
            match producer {
                Some(producer) => {
                    result.push_str(&producer()?);
                    replaced += 1;
                }
                None => {
                    tracing::warn!("No pending producer for placeholder {}", found.as_str());
                    result.push_str(found.as_str());
                }
            }
        }
        result.push_str(&text[last..]);

        tracing::debug!("Replaced {} placeholder(s), {} still pending", replaced, self.pending());
        Ok(result)
    }
}

impl std::fmt::Debug for PlaceholderTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaceholderTracker").field("pending", &self.pending()).finish()
    }
}
