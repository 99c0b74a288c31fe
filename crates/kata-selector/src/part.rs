//! Selector part kinds and how each one is rendered.

use strum_macros::{Display, EnumIter, EnumString};

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The kind of a fragment appended to a builder. Variants are declared in the
/// order they must appear inside one compound selector, so the derived `Ord`
/// is the kind order: element < id < class < attribute < pseudo-class <
/// pseudo-element.
///
/// Displays and parses as kebab-case (`pseudo-class`, `pseudo-element`, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum PartKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Rendered verbatim. Example: `div`
    Element = 1,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Rendered as `#value`. Example: `#main`
    Id = 2,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Rendered as `.value`. Example: `.container`
    Class = 3,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Rendered as `[value]`, where value is the raw attribute expression.
    /// Example: `[href$=".png"]`
    Attribute = 4,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Rendered as `:value`. Example: `:focus`
    PseudoClass = 5,

    /// [CSS Pseudo-Elements](https://www.w3.org/TR/css-pseudo-4/)
    ///
    /// Rendered as `::value`. Example: `::before`
    PseudoElement = 6,
}

impl PartKind {
    /// Kinds that may appear at most once per compound selector.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Text written before and after the fragment value.
    #[must_use]
    pub const fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Element => ("", ""),
            Self::Id => ("#", ""),
            Self::Class => (".", ""),
            Self::Attribute => ("[", "]"),
            Self::PseudoClass => (":", ""),
            Self::PseudoElement => ("::", ""),
        }
    }

    /// Render a single fragment of this kind.
    ///
    /// ```
    /// use kata_selector::PartKind;
    ///
    /// assert_eq!(PartKind::Attribute.render("type=text"), "[type=text]");
    /// ```
    #[must_use]
    pub fn render(self, value: &str) -> String {
        let (prefix, suffix) = self.delimiters();
        format!("{prefix}{value}{suffix}")
    }
}
