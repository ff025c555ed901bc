use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Extra attributes and class names merged onto a gizmo's root markup
/// element.
///
/// Every option holder embeds one of these by value. A fresh (empty) map
/// is created per holder; nothing is shared between instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MarkupOptions {
    /// Additional HTML attributes for the primary element
    /// (e.g. `{"onclick": "run_me();"}`).  Ordered map so rendered
    /// attribute order is deterministic.
    pub attributes: BTreeMap<String, String>,
    /// Additional classes for the primary element as a single string
    /// (e.g. `"example-class another-class"`).
    pub classes: String,
}

impl MarkupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, returning the previous value if one was replaced.
    pub fn insert_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let name = name.into();
        let replaced = self.attributes.insert(name.clone(), value.into());
        if replaced.is_some() {
            tracing::warn!("attribute '{name}' set twice; keeping the later value");
        }
        replaced
    }

    /// Class names as individual tokens.
    pub fn class_list(&self) -> impl Iterator<Item = &str> {
        self.classes.split_whitespace()
    }

    /// Join a gizmo's own base classes with the caller-supplied ones.
    ///
    /// Whitespace-normalized and deduplicated; base classes come first and
    /// the first occurrence of a token wins.
    pub fn merged_classes(&self, base: &str) -> String {
        let mut tokens: Vec<&str> = Vec::new();
        for token in base.split_whitespace().chain(self.class_list()) {
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        tokens.join(" ")
    }

    /// Fold another set of markup options into this one.
    /// `other`'s attributes win on conflict; its classes are appended.
    pub fn merge(&mut self, other: &MarkupOptions) {
        for (name, value) in &other.attributes {
            self.insert_attribute(name.clone(), value.clone());
        }
        self.classes = other.merged_classes(&self.classes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let markup = MarkupOptions::new();
        assert!(markup.attributes.is_empty());
        assert_eq!(markup.classes, "");
        assert_eq!(markup.class_list().count(), 0);
    }

    #[test]
    fn insert_attribute_reports_replacement() {
        let mut markup = MarkupOptions::new();
        assert_eq!(markup.insert_attribute("onclick", "run_me();"), None);
        assert_eq!(
            markup.insert_attribute("onclick", "run_me_again();"),
            Some("run_me();".to_string())
        );
        assert_eq!(markup.attributes["onclick"], "run_me_again();");
    }

    #[test]
    fn merged_classes_dedupes_and_keeps_base_first() {
        let markup = MarkupOptions {
            classes: "example-class  another-class".to_string(),
            ..MarkupOptions::new()
        };
        assert_eq!(
            markup.merged_classes("gizmo-date-picker example-class"),
            "gizmo-date-picker example-class another-class"
        );
    }

    #[test]
    fn merge_prefers_other_attributes() {
        let mut base = MarkupOptions::new();
        base.insert_attribute("data-role", "input");
        base.classes = "one".to_string();

        let mut extra = MarkupOptions::new();
        extra.insert_attribute("data-role", "picker");
        extra.classes = "two one".to_string();

        base.merge(&extra);
        assert_eq!(base.attributes["data-role"], "picker");
        assert_eq!(base.classes, "one two");
    }
}
