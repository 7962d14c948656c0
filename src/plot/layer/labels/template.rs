//! Line template and format inspection
//!
//! Templates are evaluated by the renderer. This module only splits them into
//! their parts so callers (and the CLI) can see what a template refers to.
//!
//! Syntax of a line template:
//!
//! - `^color` - aesthetic
//! - `@year` - variable; the name may contain `^` and `@` (`@nameWith^`)
//! - `@{number of cylinders}` - variable with spaces in its name
//! - `@..count..` - stat variable
//! - `\^`, `\@` - literal `^` and `@`
//! - `{{`, `}}` - literal braces; `@{{x}}` is the literal text `@{x}`

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// One piece of a parsed line template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TemplatePart {
    Text(String),
    Aes(String),
    Var(String),
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| {
        Regex::new(r"\\\^|\\@|\{\{|\}\}|\^(\w+)|@\{([^{}]*)\}|@(\.\.\w+\.\.)|@([\w^@]+)")
            .unwrap_or_else(|e| panic!("invalid template token pattern: {e}"))
    })
}

fn datetime_directive_regex() -> &'static Regex {
    static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE.get_or_init(|| {
        Regex::new(r"%[a-zA-Z]")
            .unwrap_or_else(|e| panic!("invalid date/time directive pattern: {e}"))
    })
}

fn push_text(parts: &mut Vec<TemplatePart>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(TemplatePart::Text(last)) = parts.last_mut() {
        last.push_str(text);
    } else {
        parts.push(TemplatePart::Text(text.to_string()));
    }
}

/// Split a line template into literal text, aesthetics and variables
///
/// Adjacent literal text is joined. Anything that is not a recognized token
/// passes through as text.
pub fn parse_line(template: &str) -> Vec<TemplatePart> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in token_regex().captures_iter(template) {
        let Some(whole) = caps.get(0) else { continue };
        push_text(&mut parts, &template[last..whole.start()]);
        last = whole.end();

        match whole.as_str() {
            r"\^" => push_text(&mut parts, "^"),
            r"\@" => push_text(&mut parts, "@"),
            "{{" => push_text(&mut parts, "{"),
            "}}" => push_text(&mut parts, "}"),
            _ => {
                if let Some(aes) = caps.get(1) {
                    parts.push(TemplatePart::Aes(aes.as_str().to_string()));
                } else if let Some(var) = caps.get(2).or(caps.get(3)).or(caps.get(4)) {
                    parts.push(TemplatePart::Var(var.as_str().to_string()));
                }
            }
        }
    }
    push_text(&mut parts, &template[last..]);
    parts
}

/// Target of a `format(field, ...)` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "lowercase")]
pub enum FieldRef {
    Aes(String),
    Var(String),
}

impl FieldRef {
    /// `^name` is an aesthetic; `name` and `@name` are variables
    pub fn parse(field: &str) -> Self {
        if let Some(aes) = field.strip_prefix('^') {
            return FieldRef::Aes(aes.to_string());
        }
        let name = field.strip_prefix('@').unwrap_or(field);
        let name = name
            .strip_prefix('{')
            .and_then(|n| n.strip_suffix('}'))
            .unwrap_or(name);
        FieldRef::Var(name.to_string())
    }
}

/// Kind of a format string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Number format such as `".2f"`, `",d"` or `".0%"`
    Number,
    /// Date/time pattern such as `"%d.%m.%y"`
    DateTime,
    /// String template with `{}` placeholders
    Template,
}

impl FormatKind {
    pub fn of(format: &str) -> Self {
        let unescaped = format.replace("{{", "").replace("}}", "");
        if unescaped.contains('{') {
            FormatKind::Template
        } else if datetime_directive_regex().is_match(format) {
            FormatKind::DateTime
        } else {
            FormatKind::Number
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> TemplatePart {
        TemplatePart::Text(s.to_string())
    }

    fn var(s: &str) -> TemplatePart {
        TemplatePart::Var(s.to_string())
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_line("text"), vec![text("text")]);
        assert!(parse_line("").is_empty());
    }

    #[test]
    fn test_doubled_braces_are_literal() {
        assert_eq!(parse_line("{{text}}"), vec![text("{text}")]);
        assert_eq!(
            parse_line("{{@model}}"),
            vec![text("{"), var("model"), text("}")]
        );
        assert_eq!(parse_line("@{{x}}"), vec![text("@{x}")]);
        assert_eq!(
            parse_line("@{{@{a b}}}"),
            vec![text("@{"), var("a b"), text("}")]
        );
    }

    #[test]
    fn test_aes_and_variables() {
        assert_eq!(
            parse_line("^color: @{number of cylinders}"),
            vec![
                TemplatePart::Aes("color".to_string()),
                text(": "),
                var("number of cylinders"),
            ]
        );
        assert_eq!(parse_line("@nameWith^"), vec![var("nameWith^")]);
        assert_eq!(parse_line("@{square m^2}"), vec![var("square m^2")]);
        assert_eq!(parse_line("@..count.. items"), vec![var("..count.."), text(" items")]);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(parse_line(r"x\^2 \@home"), vec![text("x^2 @home")]);
    }

    #[test]
    fn test_malformed_passes_through() {
        assert_eq!(parse_line("@{open"), vec![text("@{open")]);
        assert_eq!(parse_line("a ^ b"), vec![text("a ^ b")]);
    }

    #[test]
    fn test_field_ref() {
        assert_eq!(FieldRef::parse("^y"), FieldRef::Aes("y".to_string()));
        assert_eq!(FieldRef::parse("@model"), FieldRef::Var("model".to_string()));
        assert_eq!(FieldRef::parse("model"), FieldRef::Var("model".to_string()));
        assert_eq!(FieldRef::parse("@{a b}"), FieldRef::Var("a b".to_string()));
    }

    #[test]
    fn test_format_kind() {
        assert_eq!(FormatKind::of(".2f"), FormatKind::Number);
        assert_eq!(FormatKind::of("{.1f} %"), FormatKind::Template);
        assert_eq!(FormatKind::of("%d.%m.%y"), FormatKind::DateTime);
        assert_eq!(FormatKind::of("{{ {.1f} }}"), FormatKind::Template);
        assert_eq!(FormatKind::of("{{text}}"), FormatKind::Number);
    }

    #[test]
    fn test_percent_number_formats() {
        assert_eq!(FormatKind::of(".0%"), FormatKind::Number);
        assert_eq!(FormatKind::of(".1%"), FormatKind::Number);
        assert_eq!(FormatKind::of("%Y-%m"), FormatKind::DateTime);
        assert_eq!(FormatKind::of("{.0%} share"), FormatKind::Template);
    }
}
