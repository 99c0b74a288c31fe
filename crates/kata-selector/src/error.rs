//! Errors raised while appending fragments to a selector builder.

use thiserror::Error;

use crate::part::PartKind;

/// Errors that can occur while building a selector.
///
/// Both are fatal to the builder that produced them; the builder was consumed
/// by the failing call and should not be rebuilt from the same chain.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A fragment was appended out of the kind order.
    ///
    /// Example: `class("a")` followed by `element("div")`.
    #[error(
        "{attempted} cannot follow {previous}; selector parts go element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    Order {
        /// Kind of the last fragment already in the builder.
        previous: PartKind,
        /// Kind of the fragment that was rejected.
        attempted: PartKind,
    },

    /// A second element, id, or pseudo-element was appended.
    #[error("a selector may contain at most one {kind}")]
    DuplicatePart {
        /// The singleton kind that was repeated.
        kind: PartKind,
    },
}

/// Result alias for builder operations.
pub type Result<T> = std::result::Result<T, SelectorError>;
