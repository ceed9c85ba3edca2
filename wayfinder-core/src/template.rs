//! # Route Templates
//!
//! Compiles the route mini-syntax into an anchored regular expression once,
//! at registration time. Matching never re-parses the template.
//!
//! # Syntax
//!
//! | Form | Meaning |
//! |------|---------|
//! | `<name>` | required segment matching `[^/]+`, captured as `name` |
//! | `<name pattern>` | required segment constrained to `pattern` |
//! | `[...]` | optional group, may nest |
//! | anything else | literal text |
//!
//! Leading and trailing `/` are stripped from the template, matching how
//! request paths are normalized before lookup.
//!
//! # Example
//!
//! ```rust
//! use wayfinder_core::Template;
//!
//! let template = Template::parse(r"[<controller>[/<action>[/<id \d+>]]]").unwrap();
//!
//! let params = template.captures("blog/show/42").unwrap();
//! assert_eq!(params.get("id"), Some("42"));
//! assert!(template.captures("blog/show/abc").is_none());
//! ```

use crate::{error::TemplateError, params::Params};
use regex::Regex;
use std::fmt::{self, Write};

/// Expression used for parameters declared without a constraint.
pub const DEFAULT_SEGMENT_PATTERN: &str = "[^/]+";

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text matched verbatim.
    Literal(String),
    /// A named capture with an optional regex constraint.
    Param {
        /// Capture name.
        name: String,
        /// Constraint, `None` for [`DEFAULT_SEGMENT_PATTERN`].
        pattern: Option<String>,
    },
    /// A bracketed group that may be absent.
    Optional(Vec<Segment>),
}

/// A compiled route template.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
    regex: Regex,
    names: Vec<String>,
}

impl Template {
    /// Parse and compile a template.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let body = source.trim_matches('/');
        let segments = parse_segments(body)?;

        let mut names = Vec::new();
        collect_names(&segments, &mut names)?;

        let mut expr = String::with_capacity(body.len() * 2 + 2);
        expr.push('^');
        write_regex(&segments, &mut expr);
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|source_err| TemplateError::InvalidPattern {
            name: source.to_owned(),
            source: source_err,
        })?;

        Ok(Self {
            source: source.to_owned(),
            segments,
            regex,
            names,
        })
    }

    /// The template as authored.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The compiled, anchored expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The parsed template.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Check whether the template declares `name`.
    pub fn declares(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Match a normalized path, returning the named captures that took part
    /// in the match. Parameters inside an optional group that did not match
    /// are absent rather than empty.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;
        let params = self
            .names
            .iter()
            .filter_map(|name| caps.name(name).map(|m| (name.as_str(), m.as_str())))
            .collect();
        Some(params)
    }

    /// Render a path from parameter values.
    ///
    /// An optional group is rendered only when every parameter declared
    /// directly inside it has a value; a group without parameters of its own
    /// is rendered when one of its nested groups is. The result is checked
    /// against the compiled expression, so values violating a constraint are
    /// rejected.
    pub fn expand(&self, params: &Params) -> Result<String, TemplateError> {
        let mut path = String::new();
        render(&self.segments, params, &mut path)?;

        if !self.regex.is_match(&path) {
            return Err(TemplateError::ExpansionMismatch { path });
        }
        Ok(path)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_segments(body: &str) -> Result<Vec<Segment>, TemplateError> {
    // Enclosing levels and the byte offset of the `[` that opened each.
    let mut stack: Vec<(usize, Vec<Segment>)> = Vec::new();
    let mut current = Vec::new();
    let mut literal = String::new();
    let mut pos = 0;

    while let Some(ch) = body[pos..].chars().next() {
        match ch {
            '[' => {
                flush_literal(&mut literal, &mut current);
                stack.push((pos, std::mem::take(&mut current)));
            }
            ']' => {
                flush_literal(&mut literal, &mut current);
                let (_, parent) = stack
                    .pop()
                    .ok_or(TemplateError::UnbalancedBracket { position: pos })?;
                let group = std::mem::replace(&mut current, parent);
                current.push(Segment::Optional(group));
            }
            '<' => {
                flush_literal(&mut literal, &mut current);
                let rest = &body[pos + 1..];
                let end = rest
                    .find('>')
                    .ok_or(TemplateError::UnclosedParameter { position: pos })?;
                current.push(parse_param(&rest[..end], pos)?);
                // Skip the parameter body and the closing `>`.
                pos += end + 2;
                continue;
            }
            _ => literal.push(ch),
        }
        pos += ch.len_utf8();
    }

    if let Some((position, _)) = stack.pop() {
        return Err(TemplateError::UnbalancedBracket { position });
    }
    flush_literal(&mut literal, &mut current);
    Ok(current)
}

fn flush_literal(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

fn parse_param(body: &str, position: usize) -> Result<Segment, TemplateError> {
    let (name, pattern) = match body.split_once(char::is_whitespace) {
        Some((name, pattern)) => (name, Some(pattern.trim())),
        None => (body, None),
    };

    if name.is_empty() {
        return Err(TemplateError::EmptyParameterName { position });
    }
    if !is_identifier(name) {
        return Err(TemplateError::InvalidParameterName {
            name: name.to_owned(),
        });
    }

    let pattern = pattern.filter(|p| !p.is_empty()).map(str::to_owned);
    if let Some(ref constraint) = pattern {
        // Compile the bare fragment: an unbalanced `)` must not escape its group.
        Regex::new(constraint).map_err(|source| {
            TemplateError::InvalidPattern {
                name: name.to_owned(),
                source,
            }
        })?;
    }

    Ok(Segment::Param {
        name: name.to_owned(),
        pattern,
    })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn collect_names(segments: &[Segment], names: &mut Vec<String>) -> Result<(), TemplateError> {
    for segment in segments {
        match segment {
            Segment::Literal(_) => {}
            Segment::Param { name, .. } => {
                if names.contains(name) {
                    return Err(TemplateError::DuplicateParameter { name: name.clone() });
                }
                names.push(name.clone());
            }
            Segment::Optional(inner) => collect_names(inner, names)?,
        }
    }
    Ok(())
}

fn write_regex(segments: &[Segment], out: &mut String) {
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(&regex::escape(text)),
            Segment::Param { name, pattern } => {
                let pattern = pattern.as_deref().unwrap_or(DEFAULT_SEGMENT_PATTERN);
                // Writing into a String cannot fail.
                let _ = write!(out, "(?P<{name}>{pattern})");
            }
            Segment::Optional(inner) => {
                out.push_str("(?:");
                write_regex(inner, out);
                out.push_str(")?");
            }
        }
    }
}

fn render(segments: &[Segment], params: &Params, out: &mut String) -> Result<(), TemplateError> {
    for segment in segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Param { name, .. } => {
                let value = params
                    .get(name)
                    .ok_or_else(|| TemplateError::MissingParameter { name: name.clone() })?;
                out.push_str(value);
            }
            Segment::Optional(inner) => {
                if group_renders(inner, params) {
                    render(inner, params, out)?;
                }
            }
        }
    }
    Ok(())
}

fn group_renders(segments: &[Segment], params: &Params) -> bool {
    let mut direct = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Param { name, .. } => Some(name),
            _ => None,
        })
        .peekable();

    if direct.peek().is_some() {
        return direct.all(|name| params.contains(name));
    }

    segments.iter().any(|segment| match segment {
        Segment::Optional(inner) => group_renders(inner, params),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_compiles_nested_optionals() {
        let template = Template::parse(r"[<controller>[/<action>[/<id \d+>]]]").unwrap();
        assert_eq!(
            template.regex().as_str(),
            r"^(?:(?P<controller>[^/]+)(?:/(?P<action>[^/]+)(?:/(?P<id>\d+))?)?)?$"
        );
        let names: Vec<_> = template.param_names().collect();
        assert_eq!(names, ["controller", "action", "id"]);
    }

    #[test]
    fn test_literals_are_escaped() {
        let template = Template::parse("feed.xml").unwrap();
        assert!(template.captures("feed.xml").is_some());
        assert!(template.captures("feedxxml").is_none());
    }

    #[test]
    fn test_constraint_may_contain_brackets() {
        let template = Template::parse("tags/<tag [a-z]+>").unwrap();
        assert_eq!(template.captures("tags/rust").unwrap().get("tag"), Some("rust"));
        assert!(template.captures("tags/Rust").is_none());
    }

    #[test]
    fn test_outer_slashes_are_ignored() {
        let template = Template::parse("/blog/<slug>/").unwrap();
        assert_eq!(template.as_str(), "/blog/<slug>/");
        assert!(template.captures("blog/hello").is_some());
    }

    #[test]
    fn test_absent_optionals_are_not_captured() {
        let template = Template::parse("[<controller>[/<action>]]").unwrap();
        let captured = template.captures("blog").unwrap();
        assert_eq!(captured.get("controller"), Some("blog"));
        assert!(!captured.contains("action"));
    }

    #[test]
    fn test_unbalanced_brackets() {
        assert!(matches!(
            Template::parse("[<controller>"),
            Err(TemplateError::UnbalancedBracket { position: 0 })
        ));
        assert!(matches!(
            Template::parse("blog]"),
            Err(TemplateError::UnbalancedBracket { position: 4 })
        ));
    }

    #[test]
    fn test_parameter_errors() {
        assert!(matches!(
            Template::parse("blog/<id"),
            Err(TemplateError::UnclosedParameter { position: 5 })
        ));
        assert!(matches!(
            Template::parse("<>"),
            Err(TemplateError::EmptyParameterName { .. })
        ));
        assert!(matches!(
            Template::parse("<1st>"),
            Err(TemplateError::InvalidParameterName { .. })
        ));
        assert!(matches!(
            Template::parse("<id>/<id>"),
            Err(TemplateError::DuplicateParameter { .. })
        ));
        for source in [r"<id \d+(>", r"post/<id \d+)|(.*>", r"<id a)(b>"] {
            match Template::parse(source) {
                Err(TemplateError::InvalidPattern { name, .. }) => assert_eq!(name, "id"),
                other => panic!("expected InvalidPattern for {source}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_positional_groups_are_not_captured() {
        let template = Template::parse(r"<id (\d)(\d)>").unwrap();
        let params = template.captures("42").unwrap();
        let entries: Vec<_> = params.iter().collect();
        assert_eq!(entries, [("id", "42")]);
    }

    #[test]
    fn test_expand_drops_unfilled_optionals() {
        let template = Template::parse(r"[<controller>[/<action>[/<id \d+>]]]").unwrap();

        assert_eq!(template.expand(&Params::new()).unwrap(), "");
        assert_eq!(
            template.expand(&params(&[("controller", "blog")])).unwrap(),
            "blog"
        );
        assert_eq!(
            template
                .expand(&params(&[("controller", "blog"), ("action", "show"), ("id", "42")]))
                .unwrap(),
            "blog/show/42"
        );
    }

    #[test]
    fn test_expand_nested_group_without_own_params() {
        let template = Template::parse("archive[/page[/<n \\d+>]]").unwrap();
        assert_eq!(template.expand(&Params::new()).unwrap(), "archive");
        assert_eq!(
            template.expand(&params(&[("n", "3")])).unwrap(),
            "archive/page/3"
        );
    }

    #[test]
    fn test_expand_errors() {
        let template = Template::parse(r"post/<id \d+>").unwrap();
        assert!(matches!(
            template.expand(&Params::new()),
            Err(TemplateError::MissingParameter { .. })
        ));
        assert!(matches!(
            template.expand(&params(&[("id", "abc")])),
            Err(TemplateError::ExpansionMismatch { .. })
        ));
    }
}
