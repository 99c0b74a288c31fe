//! Command-line selector parts: `kind=value` tokens and `combinator=<sym>`
//! separators.

use anyhow::Context;
use kata_selector::{PartKind, SelectorBuilder, Stringify, combine, start};

/// One positional argument of `kata selector`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A fragment such as `class=btn`.
    Part(PartKind, String),
    /// `combinator=>` and friends; closes the current compound selector.
    Combinator(String),
}

/// Parse `kind=value`. Used as a clap value parser.
pub fn parse_token(arg: &str) -> Result<Token, String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected kind=value, got '{arg}'"))?;

    if key == "combinator" {
        return Ok(Token::Combinator(value.to_string()));
    }

    key.parse::<PartKind>()
        .map(|kind| Token::Part(kind, value.to_string()))
        .map_err(|_| {
            format!(
                "unknown part kind '{key}' (expected element, id, class, attribute, pseudo-class, pseudo-element or combinator)"
            )
        })
}

fn join(
    left: Option<Box<dyn Stringify>>,
    combinator: Option<&str>,
    right: SelectorBuilder,
) -> Box<dyn Stringify> {
    match (left, combinator) {
        (Some(left), Some(combinator)) => Box::new(combine(left.as_ref(), combinator, &right)),
        _ => Box::new(right),
    }
}

/// Build the selector text for a token list. Combinators associate to the
/// left: `a + b > c` is `(a + b) > c`.
pub fn build_selector(tokens: &[Token]) -> anyhow::Result<String> {
    let mut left: Option<Box<dyn Stringify>> = None;
    let mut pending: Option<&str> = None;
    let mut current: Option<SelectorBuilder> = None;

    for token in tokens {
        match token {
            Token::Part(kind, value) => {
                let appended = match current.take() {
                    Some(builder) => builder.append(*kind, value),
                    None => start(*kind, value),
                };
                current = Some(appended.with_context(|| format!("cannot add {kind}={value}"))?);
            }
            Token::Combinator(symbol) => {
                let right = current
                    .take()
                    .with_context(|| format!("combinator '{symbol}' has no selector on its left"))?;
                left = Some(join(left.take(), pending.take(), right));
                pending = Some(symbol.as_str());
            }
        }
    }

    let last = match (current, pending) {
        (Some(builder), _) => builder,
        (None, Some(symbol)) => {
            anyhow::bail!("combinator '{symbol}' has no selector on its right")
        }
        (None, None) => anyhow::bail!("no selector parts given"),
    };

    Ok(join(left, pending, last).stringify().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &[&str]) -> Vec<Token> {
        args.iter().map(|arg| parse_token(arg).unwrap()).collect()
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(
            parse_token("pseudo-class=hover"),
            Ok(Token::Part(PartKind::PseudoClass, "hover".to_string()))
        );
        assert_eq!(
            parse_token(r#"attribute=href$=".png""#),
            Ok(Token::Part(PartKind::Attribute, r#"href$=".png""#.to_string()))
        );
        assert_eq!(parse_token("combinator=>"), Ok(Token::Combinator(">".to_string())));
        assert!(parse_token("div").is_err());
        assert!(parse_token("tag=div").is_err());
    }

    #[test]
    fn test_build_compound() {
        let selector =
            build_selector(&tokens(&["element=a", "attribute=href", "pseudo-class=focus"])).unwrap();
        assert_eq!(selector, "a[href]:focus");
    }

    #[test]
    fn test_build_combined_left_to_right() {
        let selector = build_selector(&tokens(&[
            "element=div",
            "id=main",
            "combinator=+",
            "element=table",
            "combinator=>",
            "class=row",
        ]))
        .unwrap();
        assert_eq!(selector, "div#main + table > .row");
    }

    #[test]
    fn test_build_reports_builder_errors() {
        let err = build_selector(&tokens(&["class=a", "element=div"])).unwrap_err();
        assert!(format!("{err:#}").contains("element cannot follow class"));
    }

    #[test]
    fn test_dangling_combinators() {
        assert!(build_selector(&tokens(&["combinator=>", "element=a"])).is_err());
        assert!(build_selector(&tokens(&["element=a", "combinator=>"])).is_err());
        assert!(build_selector(&[]).is_err());
    }
}
