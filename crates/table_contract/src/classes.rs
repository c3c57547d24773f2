//! Class-name merging and value emptiness.

use serde_json::Value;

/// Joins class tokens from optional parts into one attribute value.
///
/// Parts are split on whitespace; empty parts and repeated tokens are
/// dropped, keeping the first occurrence's position.
pub fn merge_classes<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut tokens: Vec<String> = Vec::new();
    for part in parts.into_iter().flatten() {
        for token in part.as_ref().split_whitespace() {
            if !tokens.iter().any(|seen| seen == token) {
                tokens.push(token.to_string());
            }
        }
    }
    tokens.join(" ")
}

/// Whether a value carries nothing to show.
///
/// `null`, blank strings, empty arrays, and empty objects are empty; numbers
/// and booleans never are.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn merge_skips_missing_parts_and_duplicates() {
        let merged = merge_classes([
            Some("ui-row  ui-row--clickable"),
            None,
            Some(""),
            Some("ui-row highlight"),
        ]);
        assert_eq!(merged, "ui-row ui-row--clickable highlight");
    }

    #[test]
    fn merge_accepts_owned_strings() {
        let dynamic = format!("tone-{}", "danger");
        assert_eq!(merge_classes([Some("cell".to_string()), Some(dynamic)]), "cell tone-danger");
        assert_eq!(merge_classes::<_, &str>([None, None]), "");
    }

    #[test]
    fn emptiness_by_value_kind() {
        assert!(is_empty_value(&json!(null)));
        assert!(is_empty_value(&json!("   ")));
        assert!(is_empty_value(&json!([])));
        assert!(is_empty_value(&json!({})));
        assert!(!is_empty_value(&json!(0)));
        assert!(!is_empty_value(&json!(false)));
        assert!(!is_empty_value(&json!(["x"])));
    }
}
