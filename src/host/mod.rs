//! Host document abstraction.
//!
//! The bootstrap never touches a real DOM. It reads through [`Document`], so
//! browser glue, server-side prerendering and tests can all supply their own
//! element source.

mod static_document;

pub use static_document::{ElementKind, HostElement, StaticDocument};

use serde::{Deserialize, Serialize};

/// Container element the renderer draws into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountPoint {
    pub id: String,
}

impl MountPoint {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Read-only view of the host document.
pub trait Document {
    /// Looks up an element by identifier.
    fn element_by_id(&self, id: &str) -> Option<MountPoint>;

    /// Returns the text value of the first input element matching `selector`.
    ///
    /// Elements without a value (containers) resolve to `None`.
    fn input_value(&self, selector: &str) -> Option<&str>;
}

const SELECTOR_PUNCTUATION: &[char] = &['#', '.', '[', ']', '>', ':', ',', '+', '~'];

/// Extracts the identifier from an `#id` selector.
///
/// Compound, class, attribute and descendant selectors are not supported.
#[must_use]
pub fn id_from_selector(selector: &str) -> Option<&str> {
    let id = selector.strip_prefix('#')?;
    if id.is_empty()
        || id
            .chars()
            .any(|c| c.is_whitespace() || SELECTOR_PUNCTUATION.contains(&c))
    {
        return None;
    }
    Some(id)
}
