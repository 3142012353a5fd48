//! Field annotation grammar.
//!
//! An annotation is a comma-separated token list. The `keep` and `unique`
//! modifiers are pulled out wherever they appear. The remaining tokens,
//! re-joined with `,`, form the tag expression:
//!
//! | expression                           | meaning                          |
//! |--------------------------------------|----------------------------------|
//! | *(empty)*                            | synthesise from the field shape  |
//! | `-`                                  | copy the current value           |
//! | `use=<literal>`                      | parse the literal into the field |
//! | `len=<n>`                            | random string of `n` letters     |
//! | `boundary_start=<a>,boundary_end=<b>`| random number in `[a, b)`        |
//! | anything else                        | provider name, resolved later    |

use std::fmt;

const KEEP: &str = "keep";
const UNIQUE: &str = "unique";
const SKIP: &str = "-";
const USE: &str = "use";
const LEN: &str = "len";
const BOUNDARY_START: &str = "boundary_start";
const BOUNDARY_END: &str = "boundary_end";

/// Annotation text that does not follow the grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagError {
    /// A `key=value` token without exactly one `=`
    #[error("Tag \"{0}\" is not written properly")]
    Malformed(String),

    /// Wrong number of comma-delimited parts for the form
    #[error("Tag \"{tag}\" is not written properly: expected {expected} part(s)")]
    WrongPartCount { tag: String, expected: usize },

    /// Numeric literal that does not parse
    #[error("Tag \"{0}\" is not written properly: not a number")]
    NotANumber(String),

    /// Boolean literal that does not parse
    #[error("Tag \"{0}\" is not written properly: not a boolean")]
    NotABool(String),

    /// Form lacking one of its required keys
    #[error("Tag \"{tag}\" is not written properly: missing \"{key}\"")]
    MissingKey { tag: String, key: &'static str },
}

/// What a field's tag expression asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// No expression: synthesise from the shape
    Default,
    /// `-`: keep whatever the field holds
    Skip,
    /// Provider name, or any form the parser does not recognise
    Named(String),
    /// `use=<literal>`
    Use(String),
    /// `len=<n>`
    Len(usize),
    /// `boundary_start=<a>,boundary_end=<b>`, not order-checked here
    Boundary { start: i64, end: i64 },
}

/// Parsed field annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    /// Tag expression text with the modifiers removed
    pub tag: String,
    /// Structured form of `tag`
    pub expression: Expression,
    /// Retain a non-zero current value
    pub keep: bool,
    /// Values must not repeat within the `tag` domain
    pub unique: bool,
}

impl Directive {
    /// Parse a raw annotation.
    pub fn parse(raw: &str) -> Result<Self, TagError> {
        let mut keep = false;
        let mut unique = false;
        let mut rest = Vec::new();

        for token in raw.split(',') {
            match token {
                KEEP => keep = true,
                UNIQUE => unique = true,
                _ => rest.push(token),
            }
        }

        // `split` yields one empty token for empty input
        let tag = rest.join(",");
        let expression = parse_expression(&tag)?;

        Ok(Self {
            tag,
            expression,
            keep,
            unique,
        })
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = Vec::new();
        if !self.tag.is_empty() {
            tokens.push(self.tag.as_str());
        }
        if self.keep {
            tokens.push(KEEP);
        }
        if self.unique {
            tokens.push(UNIQUE);
        }
        write!(f, "{}", tokens.join(","))
    }
}

fn parse_expression(tag: &str) -> Result<Expression, TagError> {
    if tag.is_empty() {
        return Ok(Expression::Default);
    }
    if tag == SKIP {
        return Ok(Expression::Skip);
    }

    let key = tag.split('=').next().unwrap_or_default().trim();
    if !tag.contains('=') {
        return Ok(Expression::Named(tag.to_string()));
    }

    match key {
        USE => parse_use(tag),
        LEN => parse_len(tag),
        BOUNDARY_START | BOUNDARY_END => parse_boundary(tag),
        _ => Ok(Expression::Named(tag.to_string())),
    }
}

/// Split a `key=value` token, insisting on exactly one `=`.
fn split_pair(token: &str) -> Result<(&str, &str), TagError> {
    let mut parts = token.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Ok((key, value)),
        _ => Err(TagError::Malformed(token.to_string())),
    }
}

fn parse_number(token: &str) -> Result<i64, TagError> {
    let (_, text) = split_pair(token.trim())?;
    let text = text.trim();
    if let Ok(n) = text.parse::<i64>() {
        return Ok(n);
    }
    // Float spellings such as `1e3` or `10.0` truncate toward zero
    match text.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(f as i64),
        _ => Err(TagError::NotANumber(token.trim().to_string())),
    }
}

fn parse_use(tag: &str) -> Result<Expression, TagError> {
    let (_, literal) = split_pair(tag)?;
    Ok(Expression::Use(literal.to_string()))
}

fn parse_len(tag: &str) -> Result<Expression, TagError> {
    if tag.contains(',') {
        return Err(TagError::WrongPartCount {
            tag: tag.to_string(),
            expected: 1,
        });
    }
    let n = parse_number(tag)?;
    usize::try_from(n)
        .map(Expression::Len)
        .map_err(|_| TagError::NotANumber(tag.to_string()))
}

fn parse_boundary(tag: &str) -> Result<Expression, TagError> {
    let parts: Vec<&str> = tag.split(',').collect();
    let [first, second] = parts.as_slice() else {
        return Err(TagError::WrongPartCount {
            tag: tag.to_string(),
            expected: 2,
        });
    };

    let mut start = None;
    let mut end = None;
    for part in [first, second] {
        let (key, _) = split_pair(part.trim())?;
        match key.trim() {
            BOUNDARY_START => start = Some(parse_number(part)?),
            BOUNDARY_END => end = Some(parse_number(part)?),
            _ => return Err(TagError::Malformed(tag.to_string())),
        }
    }

    let start = start.ok_or_else(|| TagError::MissingKey {
        tag: tag.to_string(),
        key: BOUNDARY_START,
    })?;
    let end = end.ok_or_else(|| TagError::MissingKey {
        tag: tag.to_string(),
        key: BOUNDARY_END,
    })?;
    Ok(Expression::Boundary { start, end })
}

/// Parse a boolean literal, accepting the usual spellings.
pub fn parse_bool(literal: &str) -> Option<bool> {
    match literal {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_skip() {
        let d = Directive::parse("").unwrap();
        assert_eq!(d.expression, Expression::Default);
        assert!(!d.keep && !d.unique);

        let d = Directive::parse("-").unwrap();
        assert_eq!(d.expression, Expression::Skip);
    }

    #[test]
    fn test_modifiers_are_removed_anywhere() {
        let d = Directive::parse("unique,email,keep").unwrap();
        assert_eq!(d.tag, "email");
        assert_eq!(d.expression, Expression::Named("email".to_string()));
        assert!(d.keep);
        assert!(d.unique);

        let d = Directive::parse("boundary_start=1,unique,boundary_end=5").unwrap();
        assert_eq!(d.tag, "boundary_start=1,boundary_end=5");
        assert_eq!(d.expression, Expression::Boundary { start: 1, end: 5 });
    }

    #[test]
    fn test_modifier_only() {
        let d = Directive::parse("unique").unwrap();
        assert_eq!(d.tag, "");
        assert_eq!(d.expression, Expression::Default);
        assert!(d.unique);
    }

    #[test]
    fn test_use_literal_verbatim() {
        let d = Directive::parse("use=Power").unwrap();
        assert_eq!(d.expression, Expression::Use("Power".to_string()));

        // Commas belong to the literal
        let d = Directive::parse("use=a,b").unwrap();
        assert_eq!(d.expression, Expression::Use("a,b".to_string()));

        let d = Directive::parse("use=").unwrap();
        assert_eq!(d.expression, Expression::Use(String::new()));
    }

    #[test]
    fn test_use_with_extra_equals_is_malformed() {
        assert_eq!(
            Directive::parse("use=a=b"),
            Err(TagError::Malformed("use=a=b".to_string()))
        );
    }

    #[test]
    fn test_len() {
        let d = Directive::parse("len=12").unwrap();
        assert_eq!(d.expression, Expression::Len(12));

        let d = Directive::parse("len= 3 ").unwrap();
        assert_eq!(d.expression, Expression::Len(3));

        assert!(matches!(
            Directive::parse("len=abc"),
            Err(TagError::NotANumber(_))
        ));
        assert!(matches!(
            Directive::parse("len=-1"),
            Err(TagError::NotANumber(_))
        ));
        assert!(matches!(
            Directive::parse("len=1,len=2"),
            Err(TagError::WrongPartCount { expected: 1, .. })
        ));
    }

    #[test]
    fn test_boundary() {
        let d = Directive::parse("boundary_start=10, boundary_end=11").unwrap();
        assert_eq!(d.expression, Expression::Boundary { start: 10, end: 11 });

        // Order is only checked when drawing
        let d = Directive::parse("boundary_end=1,boundary_start=9").unwrap();
        assert_eq!(d.expression, Expression::Boundary { start: 9, end: 1 });
    }

    #[test]
    fn test_boundary_errors() {
        assert!(matches!(
            Directive::parse("boundary_start=1"),
            Err(TagError::WrongPartCount { expected: 2, .. })
        ));
        assert!(matches!(
            Directive::parse("boundary_start=1,boundary_end=2,boundary_end=3"),
            Err(TagError::WrongPartCount { .. })
        ));
        assert!(matches!(
            Directive::parse("boundary_start=x,boundary_end=2"),
            Err(TagError::NotANumber(_))
        ));
        assert!(matches!(
            Directive::parse("boundary_start=1,boundary_start=2"),
            Err(TagError::MissingKey {
                key: BOUNDARY_END,
                ..
            })
        ));
        assert!(matches!(
            Directive::parse("boundary_start=1,size=2"),
            Err(TagError::Malformed(_))
        ));
    }

    #[test]
    fn test_unrecognised_forms_are_named() {
        let d = Directive::parse("size=3").unwrap();
        assert_eq!(d.expression, Expression::Named("size=3".to_string()));

        let d = Directive::parse(" use=x").unwrap();
        assert_eq!(d.expression, Expression::Use("x".to_string()));
    }

    #[test]
    fn test_display_round_trip() {
        let d = Directive::parse("keep,len=4").unwrap();
        assert_eq!(d.to_string(), "len=4,keep");
        assert_eq!(Directive::parse(&d.to_string()).unwrap(), d);
    }

    #[test]
    fn test_parse_bool() {
        for s in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(s), Some(true));
        }
        for s in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(s), Some(false));
        }
        assert_eq!(parse_bool("yes"), None);
        assert_eq!(parse_bool("tRUE"), None);
    }
}
