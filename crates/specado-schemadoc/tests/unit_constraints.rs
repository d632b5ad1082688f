//! Unit tests for constraint phrases and literal value rendering

use serde_json::{json, Value};
use specado_schemadoc::{humanize_constraints, prettify_value, to_schema_type_value, Schema};

fn humanize(value: Value) -> Vec<String> {
    humanize_constraints(&Schema::from_value(&value).expect("test schema should parse"))
}

#[cfg(test)]
mod constraint_phrases {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(humanize(json!({"minimum": 2, "exclusiveMaximum": 5})), vec!["[ 2 .. 5 )"]);
        assert_eq!(humanize(json!({"minLength": 1})), vec!["non-empty"]);
        assert_eq!(humanize(json!({"multipleOf": 0.0001})), vec!["decimal places <= 4"]);
    }

    #[test]
    fn test_lumens_payload() {
        let constraints = humanize(json!({
            "type": "integer",
            "minimum": 0,
            "maximum": 100000,
            "multipleOf": 10
        }));
        assert_eq!(constraints, vec!["[ 0 .. 100000 ]", "multiple of 10"]);
    }

    #[test]
    fn test_fractional_bounds() {
        assert_eq!(
            humanize(json!({"exclusiveMinimum": -0.5, "exclusiveMaximum": 0.5})),
            vec!["( -0.5 .. 0.5 )"]
        );
    }

    #[test]
    fn test_every_group_present() {
        let constraints = humanize(json!({
            "minimum": 1,
            "multipleOf": 0.01,
            "minLength": 2,
            "maxItems": 3,
            "uniqueItems": true,
            "minProperties": 1
        }));
        assert_eq!(
            constraints,
            vec![
                ">= 1",
                "decimal places <= 2",
                ">= 2 characters",
                "<= 3 unique items",
                "non-empty",
            ]
        );
    }

    #[test]
    fn test_non_empty_only_without_upper_bound() {
        assert_eq!(humanize(json!({"minItems": 1, "maxItems": 4})), vec!["[ 1 .. 4 ] items"]);
        assert_eq!(
            humanize(json!({"minProperties": 1, "maxProperties": 1})),
            vec!["1 properties"]
        );
    }

    #[test]
    fn test_integral_float_counts() {
        let raw = json!({"type": "string", "minLength": 1.0});
        assert_eq!(to_schema_type_value(&raw), "string");
        assert_eq!(humanize(raw), vec!["non-empty"]);
        assert_eq!(
            humanize(json!({"minItems": 2.0, "maxItems": 1e1})),
            vec!["[ 2 .. 10 ] items"]
        );
    }

    #[test]
    fn test_nothing_to_describe() {
        assert!(humanize(json!({})).is_empty());
        assert!(humanize(json!({"type": "string", "pattern": "^a"})).is_empty());
        assert!(humanize_constraints(&Schema::Bool(false)).is_empty());
    }
}

#[cfg(test)]
mod literal_values {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert_eq!(prettify_value(&json!(["foobar", 2137, false])), "[foobar,2137,false]");
        assert_eq!(prettify_value(&json!("foobar")), "\"foobar\"");
    }

    #[test]
    fn test_numbers_and_booleans_are_unquoted() {
        assert_eq!(prettify_value(&json!(0.25)), "0.25");
        assert_eq!(prettify_value(&json!(-7)), "-7");
        assert_eq!(prettify_value(&json!(true)), "true");
    }

    #[test]
    fn test_objects_are_compact_json() {
        assert_eq!(
            prettify_value(&json!({"lumens": 3, "sentAt": "2024-01-01"})),
            r#"{"lumens":3,"sentAt":"2024-01-01"}"#
        );
    }
}
