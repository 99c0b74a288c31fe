//! Selector builder and combined selectors.

use std::fmt;

use kata_common::warning::warn_once;

use crate::combinator::Combinator;
use crate::error::{Result, SelectorError};
use crate::part::PartKind;

/// Anything that has finished selector text.
///
/// Both [`SelectorBuilder`] and [`CombinedSelector`] implement this, so either
/// can be an operand of [`combine`](crate::combine).
pub trait Stringify {
    /// The accumulated selector text.
    fn stringify(&self) -> &str;
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// Accumulates fragments of one compound selector, e.g.
/// `a#nav.item[href$=".png"]:focus::after`.
///
/// Every append consumes the builder and hands it back on success, so chains
/// read `element("a")?.class("item")?`. Appends are validated before anything
/// is written: a failed append never leaves a partial fragment behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorBuilder {
    serialized: String,
    part_kinds: Vec<PartKind>,
    element_count: u8,
    id_count: u8,
    pseudo_element_count: u8,
}

impl SelectorBuilder {
    pub(crate) const fn new() -> Self {
        Self {
            serialized: String::new(),
            part_kinds: Vec::new(),
            element_count: 0,
            id_count: 0,
            pseudo_element_count: 0,
        }
    }

    /// Append a fragment of the given kind.
    ///
    /// The named methods (`element`, `id`, ...) are shorthands for this.
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicatePart`] if `kind` is a singleton that is
    /// already present, otherwise [`SelectorError::Order`] if `kind` sorts
    /// before the last appended kind.
    pub fn append(mut self, kind: PartKind, value: &str) -> Result<Self> {
        self.check(kind)?;

        let (prefix, suffix) = kind.delimiters();
        self.serialized.push_str(prefix);
        self.serialized.push_str(value);
        self.serialized.push_str(suffix);

        if let Some(count) = self.singleton_count_mut(kind) {
            *count += 1;
        }
        self.part_kinds.push(kind);
        Ok(self)
    }

    /// Duplicates are reported ahead of ordering, so `div#main` followed by
    /// `span` is a duplicate element rather than an out-of-order one.
    ///
    /// The kind sequence only grows and is sorted before every append, so
    /// comparing against the last kind covers the whole history.
    fn check(&self, kind: PartKind) -> Result<()> {
        if self.singleton_count(kind).is_some_and(|count| count >= 1) {
            return Err(SelectorError::DuplicatePart { kind });
        }

        match self.part_kinds.last() {
            Some(&previous) if previous > kind => Err(SelectorError::Order {
                previous,
                attempted: kind,
            }),
            _ => Ok(()),
        }
    }

    const fn singleton_count(&self, kind: PartKind) -> Option<u8> {
        match kind {
            PartKind::Element => Some(self.element_count),
            PartKind::Id => Some(self.id_count),
            PartKind::PseudoElement => Some(self.pseudo_element_count),
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass => None,
        }
    }

    fn singleton_count_mut(&mut self, kind: PartKind) -> Option<&mut u8> {
        match kind {
            PartKind::Element => Some(&mut self.element_count),
            PartKind::Id => Some(&mut self.id_count),
            PartKind::PseudoElement => Some(&mut self.pseudo_element_count),
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass => None,
        }
    }

    /// Append a type selector, written verbatim.
    ///
    /// # Errors
    ///
    /// Fails on a second element, or when any other kind of part is already present.
    pub fn element(self, value: &str) -> Result<Self> {
        self.append(PartKind::Element, value)
    }

    /// Append `#value`.
    ///
    /// # Errors
    ///
    /// Fails on a second id, or after a class, attribute, or pseudo part.
    pub fn id(self, value: &str) -> Result<Self> {
        self.append(PartKind::Id, value)
    }

    /// Append `.value`.
    ///
    /// # Errors
    ///
    /// Fails after an attribute or pseudo part.
    pub fn class(self, value: &str) -> Result<Self> {
        self.append(PartKind::Class, value)
    }

    /// Append `[value]`. The value is the raw attribute expression, such as
    /// `href$=".png"`.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-class or pseudo-element.
    pub fn attr(self, value: &str) -> Result<Self> {
        self.append(PartKind::Attribute, value)
    }

    /// Append `:value`.
    ///
    /// # Errors
    ///
    /// Fails after a pseudo-element.
    pub fn pseudo_class(self, value: &str) -> Result<Self> {
        self.append(PartKind::PseudoClass, value)
    }

    /// Append `::value`.
    ///
    /// # Errors
    ///
    /// Fails on a second pseudo-element.
    pub fn pseudo_element(self, value: &str) -> Result<Self> {
        self.append(PartKind::PseudoElement, value)
    }

    /// The selector text built so far. Calling this never changes the builder.
    #[must_use]
    pub fn stringify(&self) -> &str {
        &self.serialized
    }

    /// Kinds of the appended fragments, in append order.
    #[must_use]
    pub fn part_kinds(&self) -> &[PartKind] {
        &self.part_kinds
    }

    /// Whether no fragment has been appended yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.part_kinds.is_empty()
    }
}

impl Stringify for SelectorBuilder {
    fn stringify(&self) -> &str {
        &self.serialized
    }
}

impl fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialized)
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// Two selectors joined by a combinator. Terminal: it can be stringified or
/// combined further, but takes no more fragments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector {
    serialized: String,
}

impl CombinedSelector {
    /// Renders `left + " " + combinator + " " + right`. The combinator is
    /// written verbatim; anything other than the four CSS combinators gets a
    /// one-time warning but is still accepted.
    pub(crate) fn new<L, C, R>(left: &L, combinator: &C, right: &R) -> Self
    where
        L: Stringify + ?Sized,
        C: AsRef<str> + ?Sized,
        R: Stringify + ?Sized,
    {
        let combinator = combinator.as_ref();
        if Combinator::from_symbol(combinator).is_none() {
            warn_once(
                "selector",
                &format!("'{combinator}' is not a CSS combinator; passing it through verbatim"),
            );
        }

        Self {
            serialized: format!("{} {combinator} {}", left.stringify(), right.stringify()),
        }
    }

    /// The combined selector text.
    #[must_use]
    pub fn stringify(&self) -> &str {
        &self.serialized
    }
}

impl Stringify for CombinedSelector {
    fn stringify(&self) -> &str {
        &self.serialized
    }
}

impl fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialized)
    }
}
