//! Builder for CSS selector strings.
//!
//! # Scope
//!
//! This crate builds the text of a selector one fragment at a time and
//! enforces the two structural rules of a compound selector
//! ([Selectors Level 4 § 4.2](https://www.w3.org/TR/selectors-4/#compound)):
//!
//! - **Part order**: element, id, class, attribute, pseudo-class,
//!   pseudo-element. Appending out of order fails with
//!   [`SelectorError::Order`].
//! - **Singletons**: at most one element, one id, and one pseudo-element.
//!   A second one fails with [`SelectorError::DuplicatePart`].
//!
//! Two finished selectors can be joined with a combinator into a
//! [`CombinedSelector`], and combined selectors nest.
//!
//! # Example
//!
//! ```
//! use kata_selector::{combine, element, id};
//!
//! # fn main() -> kata_selector::Result<()> {
//! let list = id("main")?.class("container")?.class("editable")?;
//! assert_eq!(list.stringify(), "#main.container.editable");
//!
//! let pair = combine(&element("div")?.id("main")?, "+", &element("table")?.id("data")?);
//! assert_eq!(pair.to_string(), "div#main + table#data");
//! # Ok(())
//! # }
//! ```
//!
//! # Not Implemented
//!
//! - Parsing selector text
//! - Checking values against real CSS grammar (names are written verbatim)
//! - Specificity and DOM matching

/// Selector builder, combined selectors, and the [`Stringify`] trait.
pub mod builder;
/// CSS combinators per [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators).
pub mod combinator;
/// Builder errors.
pub mod error;
/// Fragment kinds and their rendering.
pub mod part;

pub use builder::{CombinedSelector, SelectorBuilder, Stringify};
pub use combinator::Combinator;
pub use error::{Result, SelectorError};
pub use part::PartKind;

/// Start a new selector with a fragment of any kind.
///
/// # Errors
///
/// Never fails on an empty builder; the `Result` matches the chained methods.
pub fn start(kind: PartKind, value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().append(kind, value)
}

/// Start a new selector with a type selector, e.g. `div`.
///
/// # Errors
///
/// Never fails on an empty builder; see [`start`].
pub fn element(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().element(value)
}

/// Start a new selector with `#value`.
///
/// # Errors
///
/// Never fails on an empty builder; see [`start`].
pub fn id(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().id(value)
}

/// Start a new selector with `.value`.
///
/// # Errors
///
/// Never fails on an empty builder; see [`start`].
pub fn class(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().class(value)
}

/// Start a new selector with `[value]`.
///
/// # Errors
///
/// Never fails on an empty builder; see [`start`].
pub fn attr(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().attr(value)
}

/// Start a new selector with `:value`.
///
/// # Errors
///
/// Never fails on an empty builder; see [`start`].
pub fn pseudo_class(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().pseudo_class(value)
}

/// Start a new selector with `::value`.
///
/// # Errors
///
/// Never fails on an empty builder; see [`start`].
pub fn pseudo_element(value: &str) -> Result<SelectorBuilder> {
    SelectorBuilder::new().pseudo_element(value)
}

/// Join two selectors as `selector1 + " " + combinator + " " + selector2`.
///
/// The combinator may be a [`Combinator`] or any string; it is written
/// verbatim with one space on each side. Operands are only read.
#[must_use]
pub fn combine<L, C, R>(selector1: &L, combinator: &C, selector2: &R) -> CombinedSelector
where
    L: Stringify + ?Sized,
    C: AsRef<str> + ?Sized,
    R: Stringify + ?Sized,
{
    CombinedSelector::new(selector1, combinator, selector2)
}
