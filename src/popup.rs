//! Popup content generation for agent features.

use serde_json::Value;

use crate::feature::Properties;

/// Builds the popup HTML for a feature: a table with one row per property.
///
/// Keys and values are written as raw text. Values originating from untrusted
/// input can therefore inject markup into the popup; callers that display
/// third-party data must sanitize it first.
pub fn popup_content(properties: &Properties) -> String {
    let mut content = String::from("<table>");
    for (key, value) in properties {
        content.push_str("<tr><td>");
        content.push_str(key);
        content.push_str("</td><td>");
        content.push_str(&value_text(value));
        content.push_str("</td></tr>");
    }
    content.push_str("</table>");
    content
}

/// Text form of a property value as shown in popup cells: strings without
/// surrounding quotes, everything else in its JSON form.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn properties(value: serde_json::Value) -> Properties {
        serde_json::from_value(value).expect("valid properties")
    }

    #[test]
    fn one_row_per_property() {
        let content = popup_content(&properties(json!({"a": 1, "b": 2})));
        insta::assert_snapshot!(
            content,
            @"<table><tr><td>a</td><td>1</td></tr><tr><td>b</td><td>2</td></tr></table>"
        );
    }

    #[test]
    fn empty_properties_produce_empty_table() {
        assert_eq!(popup_content(&Properties::new()), "<table></table>");
    }

    #[test]
    fn string_values_are_written_without_quotes() {
        let content = popup_content(&properties(json!({"name": "plant", "output": 12.5})));
        insta::assert_snapshot!(
            content,
            @"<table><tr><td>name</td><td>plant</td></tr><tr><td>output</td><td>12.5</td></tr></table>"
        );
    }
}
