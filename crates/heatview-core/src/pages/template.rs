//! Placeholder templating for page skeletons
//!
//! Skeleton files mark substitution points as `__{{KEY}}__`. A key is a
//! non-empty run of non-whitespace characters ending at the first closing
//! sentinel. Substitution is a single left-to-right pass: inserted values are
//! never scanned again, so a value may itself contain sentinel text.

extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::collections::btree_map;
use alloc::string::{String, ToString};

use core::fmt::Display;

use log::warn;

/// Opening sentinel of a placeholder
pub const PLACEHOLDER_BEGIN: &str = "__{{";

/// Closing sentinel of a placeholder
pub const PLACEHOLDER_END: &str = "}}__";

/// Values available to a template, keyed by placeholder name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVariables {
    values: BTreeMap<String, String>,
}

impl TemplateVariables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing an earlier value of the same key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Display) {
        self.values.insert(key.into(), value.to_string());
    }

    /// Builder form of [`Self::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate variables in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.values.iter()
    }
}

impl<K: Into<String>, V: Display> FromIterator<(K, V)> for TemplateVariables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut variables = Self::new();
        for (key, value) in iter {
            variables.insert(key, value);
        }
        variables
    }
}

/// One placeholder found in a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte offset of the opening sentinel
    pub start: usize,
    /// Byte offset just past the closing sentinel
    pub end: usize,
    /// Text between the sentinels
    pub key: &'a str,
}

/// Iterator over the well-formed placeholders of a text, left to right
pub struct Placeholders<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let start = self.cursor + self.text[self.cursor..].find(PLACEHOLDER_BEGIN)?;
            let key_start = start + PLACEHOLDER_BEGIN.len();

            let Some(key_len) = self.text[key_start..].find(PLACEHOLDER_END) else {
                // Unterminated: nothing after this point can close
                self.cursor = self.text.len();
                return None;
            };

            let key = &self.text[key_start..key_start + key_len];
            if is_valid_key(key) {
                let end = key_start + key_len + PLACEHOLDER_END.len();
                self.cursor = end;
                return Some(Placeholder { start, end, key });
            }

            // Malformed: retry from the next byte (sentinels are ASCII)
            self.cursor = start + 1;
        }
    }
}

/// Find the placeholders of a text
pub fn placeholders(text: &str) -> Placeholders<'_> {
    Placeholders { text, cursor: 0 }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.chars().any(char::is_whitespace)
}

/// Replace every placeholder whose key is defined
///
/// Placeholders with an unknown key stay in the output verbatim and are
/// reported with a warning. Text without placeholders comes back unchanged.
pub fn fill_template(text: &str, variables: &TemplateVariables) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;

    for placeholder in placeholders(text) {
        out.push_str(&text[copied..placeholder.start]);
        match variables.get(placeholder.key) {
            Some(value) => out.push_str(value),
            None => {
                warn!("Template variable not set: {}", placeholder.key);
                out.push_str(&text[placeholder.start..placeholder.end]);
            }
        }
        copied = placeholder.end;
    }

    out.push_str(&text[copied..]);
    out
}

/// Wrap a page body in the shared header and footer
pub fn assemble_page(header: &str, body: &str, footer: &str) -> String {
    let mut page = String::with_capacity(header.len() + body.len() + footer.len());
    page.push_str(header);
    page.push_str(body);
    page.push_str(footer);
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn vars() -> TemplateVariables {
        TemplateVariables::new()
            .with("t", 15)
            .with("name", "boiler")
    }

    #[test]
    fn test_single_substitution() {
        assert_eq!(
            fill_template("Outside: __{{t}}__ °C", &vars()),
            "Outside: 15 °C"
        );
    }

    #[test]
    fn test_plain_text_unchanged() {
        let text = "<p>No placeholders, only __ and {{braces}}</p>";
        let once = fill_template(text, &vars());
        assert_eq!(once, text);
        assert_eq!(fill_template(&once, &vars()), text);
    }

    #[test]
    fn test_repeated_placeholder() {
        assert_eq!(
            fill_template("__{{t}}__/__{{t}}__", &vars()),
            "15/15"
        );
    }

    #[test]
    fn test_adjacent_placeholders() {
        assert_eq!(
            fill_template("__{{name}}____{{t}}__", &vars()),
            "boiler15"
        );
    }

    #[test]
    fn test_missing_key_left_untouched() {
        assert_eq!(
            fill_template("a __{{missing}}__ b __{{t}}__", &vars()),
            "a __{{missing}}__ b 15"
        );
    }

    #[test]
    fn test_malformed_placeholders_left_untouched() {
        let v = vars();
        assert_eq!(fill_template("__{{t}}", &v), "__{{t}}");
        assert_eq!(fill_template("__{{}}__", &v), "__{{}}__");
        assert_eq!(fill_template("__{{t x}}__", &v), "__{{t x}}__");
        assert_eq!(fill_template("__{{ __{{t}}__", &v), "__{{ 15");
    }

    #[test]
    fn test_values_not_rescanned() {
        let v = TemplateVariables::new()
            .with("a", "__{{b}}__")
            .with("b", "deep");
        assert_eq!(fill_template("__{{a}}__", &v), "__{{b}}__");
    }

    #[test]
    fn test_placeholder_offsets() {
        let found: Vec<Placeholder<'_>> = placeholders("x __{{k}}__").collect();
        assert_eq!(
            found,
            [Placeholder {
                start: 2,
                end: 11,
                key: "k"
            }]
        );
    }

    #[test]
    fn test_variables_from_iterator() {
        let v: TemplateVariables = [("a", 1), ("b", 2)].into_iter().collect();
        assert_eq!(v.len(), 2);
        assert_eq!(v.get("b"), Some("2"));
        assert!(!v.contains_key("c"));
    }

    #[test]
    fn test_assemble_page() {
        let page = assemble_page("<html>", "__{{t}}__", "</html>");
        assert_eq!(fill_template(&page, &vars()), "<html>15</html>");
    }
}
