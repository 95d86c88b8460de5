//! Action resolution.
//!
//! Templated controller actions carry `{param}` tokens in their string
//! fields. Resolution replaces each token with the captured value and then
//! strips whatever marker characters are left over. The substitution is
//! purely textual: values are spliced in verbatim, with no escaping, and
//! stray braces (including any contributed by a captured value) are removed
//! from the result. It never fails.

use ruten_core::{Action, RouteParams};

/// Substitute captured parameters into a templated action.
///
/// Handler and plain controller actions pass through unchanged.
pub fn resolve<R>(action: Action<R>, params: &RouteParams) -> Action<R> {
    match action {
        Action::Template { name, action } => Action::Template {
            name: substitute(&name, params),
            action: substitute(&action, params),
        },
        other => other,
    }
}

fn substitute(template: &str, params: &RouteParams) -> String {
    let mut out = template.to_string();
    for (name, value) in params.iter() {
        let token = format!("{{{name}}}");
        out = out.replace(&token, value);
    }
    out.retain(|c| c != '{' && c != '}');
    out
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use ruten_core::{Action, RouteParams};

    fn params(pairs: &[(&str, &str)]) -> RouteParams {
        let mut params = RouteParams::new();
        for (name, value) in pairs {
            params.insert(*name, *value);
        }
        params
    }

    #[test]
    fn test_template_fields_are_substituted() {
        let action: Action<()> = Action::template("UserController", "show{id}");
        let resolved = resolve(action, &params(&[("id", "42")]));
        assert_eq!(resolved, Action::template("UserController", "show42"));
    }

    #[test]
    fn test_unmatched_tokens_lose_their_markers() {
        let action: Action<()> = Action::template("{area}Controller", "list");
        let resolved = resolve(action, &params(&[]));
        assert_eq!(resolved, Action::template("areaController", "list"));
    }

    #[test]
    fn test_substitution_is_textual_only() {
        let action: Action<()> = Action::template("Admin", "open{name}");
        let resolved = resolve(action, &params(&[("name", "{x}")]));
        // Braces arriving via the captured value are stripped too.
        assert_eq!(resolved, Action::template("Admin", "openx"));
    }

    #[test]
    fn test_other_variants_pass_through() {
        let controller: Action<()> = Action::controller("UserController", "show{id}");
        let resolved = resolve(controller.clone(), &params(&[("id", "42")]));
        assert_eq!(resolved, controller);
    }
}
