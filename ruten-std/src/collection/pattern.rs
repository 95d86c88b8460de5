//! Route pattern parsing.
//!
//! Patterns are absolute paths whose dynamic segments are written as
//! `{name}` (matching one segment, `[^/]+`) or `{name:regex}` for a custom
//! sub-pattern. A pattern with no placeholders is a static route. Literal
//! parts are regex-escaped. Each placeholder must become exactly one capture
//! group or the group-count disambiguation breaks, so custom sub-patterns
//! are not allowed to introduce capture groups of their own.

use super::BuildError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedPattern {
    /// A literal path, served from the static table.
    Static(String),
    /// A parameterized path, compiled to a regex fragment (unanchored; the
    /// chunk compiler adds the anchors around the combined alternation).
    Dynamic {
        regex: String,
        params: Vec<String>,
        depth: usize,
    },
}

pub(crate) fn parse(pattern: &str) -> Result<ParsedPattern, BuildError> {
    let invalid = |reason: &str| BuildError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    };

    let mut regex = String::new();
    let mut params: Vec<String> = Vec::new();
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        let (literal, tail) = rest.split_at(open);
        if literal.contains('}') {
            return Err(invalid("unbalanced `}`"));
        }
        regex.push_str(&regex::escape(literal));

        // Find the matching close brace; custom sub-patterns may contain
        // nested braces, e.g. `{id:\d{4}}`.
        let mut nesting = 0usize;
        let mut close = None;
        for (i, c) in tail.char_indices() {
            match c {
                '{' => nesting += 1,
                '}' => {
                    nesting -= 1;
                    if nesting == 0 {
                        close = Some(i);
                        break;
                    }
                }
                _ => {}
            }
        }
        let Some(close) = close else {
            return Err(invalid("unbalanced `{`"));
        };

        let placeholder = &tail[1..close];
        let (name, custom) = match placeholder.split_once(':') {
            Some((name, custom)) => (name, Some(custom)),
            None => (placeholder, None),
        };
        if !is_param_name(name) {
            return Err(invalid("placeholder names must be identifiers"));
        }
        if params.iter().any(|existing| existing == name) {
            return Err(BuildError::DuplicateParam {
                pattern: pattern.to_string(),
                name: name.to_string(),
            });
        }
        params.push(name.to_string());

        match custom {
            Some(custom) if custom.is_empty() => {
                return Err(invalid("empty custom sub-pattern"));
            }
            Some(custom) if has_capturing_group(custom) => {
                return Err(invalid("capturing groups are not allowed in sub-patterns"));
            }
            Some(custom) => {
                regex.push('(');
                regex.push_str(custom);
                regex.push(')');
            }
            None => regex.push_str("([^/]+)"),
        }

        rest = &tail[close + 1..];
    }

    if rest.contains('}') {
        return Err(invalid("unbalanced `}`"));
    }
    regex.push_str(&regex::escape(rest));

    if params.is_empty() {
        Ok(ParsedPattern::Static(pattern.to_string()))
    } else {
        Ok(ParsedPattern::Dynamic {
            regex,
            params,
            depth: pattern.matches('/').count(),
        })
    }
}

fn is_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// True if `pattern` contains a `(` that opens a capturing group, i.e. one
/// that is neither escaped nor followed by `?`.
fn has_capturing_group(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'(' {
            continue;
        }
        let escaped = i > 0 && bytes[i - 1] == b'\\';
        let non_capturing = bytes.get(i + 1) == Some(&b'?');
        if !escaped && !non_capturing {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{ParsedPattern, parse};
    use crate::collection::BuildError;

    #[test]
    fn test_literal_pattern_is_static() {
        assert_eq!(
            parse("/users/new").unwrap(),
            ParsedPattern::Static("/users/new".to_string())
        );
    }

    #[test]
    fn test_placeholder_becomes_segment_group() {
        let parsed = parse("/users/{id}").unwrap();
        assert_eq!(
            parsed,
            ParsedPattern::Dynamic {
                regex: "/users/([^/]+)".to_string(),
                params: vec!["id".to_string()],
                depth: 2,
            }
        );
    }

    #[test]
    fn test_custom_sub_pattern() {
        let parsed = parse(r"/posts/{year:\d{4}}/{slug}").unwrap();
        assert_eq!(
            parsed,
            ParsedPattern::Dynamic {
                regex: r"/posts/(\d{4})/([^/]+)".to_string(),
                params: vec!["year".to_string(), "slug".to_string()],
                depth: 3,
            }
        );
    }

    #[test]
    fn test_literal_parts_are_escaped() {
        let parsed = parse("/v1.0/{id}").unwrap();
        match parsed {
            ParsedPattern::Dynamic { regex, .. } => {
                assert_eq!(regex, r"/v1\.0/([^/]+)");
            }
            other => panic!("expected dynamic pattern, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_param_is_rejected() {
        let err = parse("/x/{id}/{id}").unwrap_err();
        assert!(matches!(
            err,
            BuildError::DuplicateParam { name, .. } if name == "id"
        ));
    }

    #[test]
    fn test_unbalanced_braces_are_rejected() {
        assert!(parse("/x/{id").is_err());
        assert!(parse("/x/id}").is_err());
        assert!(parse("/x/{id}}").is_err());
    }

    #[test]
    fn test_bad_names_are_rejected() {
        assert!(parse("/x/{}").is_err());
        assert!(parse("/x/{1id}").is_err());
        assert!(parse("/x/{a-b}").is_err());
    }

    #[test]
    fn test_capturing_sub_pattern_is_rejected() {
        assert!(parse(r"/x/{id:(\d+)}").is_err());
        assert!(parse(r"/x/{id:(?:a|b)}").is_ok());
        assert!(parse(r"/x/{id:a\(b}").is_ok());
    }
}
