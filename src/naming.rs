//! Identifier synthesis for declaration and property names.
//!
//! Purely syntactic: keys are split on word separators and re-joined. There is
//! no dictionary, so `items` stays `Items` rather than becoming `Item`.
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}_$][\p{L}\p{N}_$]*$").expect("identifier regex is valid")
});

/// Name used when a key has no identifier characters at all (`""`, `"--"`).
const ANONYMOUS: &str = "Anonymous";

pub fn is_separator(c: char) -> bool {
    c == '-' || c == '.' || c.is_whitespace()
}

pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

fn segments(key: &str) -> impl Iterator<Item = &str> {
    key.split(is_separator).filter(|s| !s.is_empty())
}

fn map_first(s: &str, f: impl Fn(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => f(first) + chars.as_str(),
        None => String::new(),
    }
}

fn capitalize(s: &str) -> String {
    map_first(s, |c| c.to_uppercase().collect())
}

fn decapitalize(s: &str) -> String {
    map_first(s, |c| c.to_lowercase().collect())
}

/// PascalCase declaration name proposed for an object reached through `key`.
pub fn propose_name(key: &str) -> String {
    let mut out: String = segments(key).map(capitalize).collect();
    out.retain(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if out.is_empty() {
        return ANONYMOUS.to_string();
    }
    if out.starts_with(|c: char| c.is_numeric()) {
        out.insert(0, '_');
    }
    out
}

pub fn camel_case(key: &str) -> String {
    let mut parts = segments(key);
    let mut out = parts.next().map(decapitalize).unwrap_or_default();
    for part in parts {
        out.push_str(&capitalize(part));
    }
    out
}

/// Property name as written inside a declaration body.
///
/// Keys with separators are camelCased; anything that still isn't a bare
/// identifier falls back to the original key as a quoted string literal.
pub fn property_name(key: &str) -> String {
    let candidate = if key.contains(is_separator) {
        camel_case(key)
    } else {
        key.to_string()
    };
    if is_identifier(&candidate) {
        candidate
    } else {
        Value::String(key.to_string()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_case_from_kebab_and_plain_keys() {
        assert_eq!(propose_name("user"), "User");
        assert_eq!(propose_name("geographic-position"), "GeographicPosition");
        assert_eq!(propose_name("first name"), "FirstName");
        assert_eq!(propose_name("a.b.c"), "ABC");
        assert_eq!(propose_name("user_id"), "User_id");
        assert_eq!(propose_name("catchPhrase"), "CatchPhrase");
    }

    #[test]
    fn pascal_case_is_not_singularized() {
        assert_eq!(propose_name("items"), "Items");
        assert_eq!(propose_name("facilities"), "Facilities");
    }

    #[test]
    fn degenerate_keys_still_yield_identifiers() {
        assert_eq!(propose_name(""), "Anonymous");
        assert_eq!(propose_name("--"), "Anonymous");
        assert_eq!(propose_name("1st-place"), "_1stPlace");
        assert_eq!(propose_name("a/b"), "Ab");
        assert!(is_identifier(&propose_name("über-größe")));
    }

    #[test]
    fn property_names() {
        assert_eq!(property_name("name"), "name");
        assert_eq!(property_name("geographic-position"), "geographicPosition");
        assert_eq!(property_name("Content-Type"), "contentType");
        assert_eq!(property_name("$ref"), "$ref");
        assert_eq!(property_name("snake_case"), "snake_case");
    }

    #[test]
    fn non_identifiers_are_quoted_verbatim() {
        assert_eq!(property_name("1st-place"), "\"1st-place\"");
        assert_eq!(property_name("a/b"), "\"a/b\"");
        assert_eq!(property_name(""), "\"\"");
        assert_eq!(property_name("say \"hi\""), r#""say \"hi\"""#);
    }
}
