//! Human-readable constraint descriptions
//!
//! Copyright (c) 2025 Specado Team
//! Licensed under the Apache-2.0 license

use crate::documentation::prettify::format_number;
use crate::model::{ExclusiveBound, Schema, SchemaObject};
use regex::Regex;
use serde_json::Number;
use std::sync::OnceLock;

static DECIMAL_STEP_REGEX: OnceLock<Regex> = OnceLock::new();

/// Matches negative powers of ten: `0.01`, `0.0001`, `1e-7`
fn decimal_step_regex() -> &'static Regex {
    DECIMAL_STEP_REGEX.get_or_init(|| {
        Regex::new(r"^(?:0\.(0*)1|1e-(\d+))$").expect("decimal step pattern is valid")
    })
}

/// One side of a numeric range
struct Bound {
    value: String,
    exclusive: bool,
}

impl Bound {
    /// Resolve a side from its inclusive and exclusive keywords
    ///
    /// A numeric exclusive bound wins over the inclusive one. The draft-4
    /// boolean form marks the inclusive value as exclusive.
    fn resolve(inclusive: Option<&Number>, exclusive: Option<&ExclusiveBound>) -> Option<Self> {
        match (exclusive, inclusive) {
            (Some(ExclusiveBound::Value(value)), _) => Some(Self {
                value: format_number(value),
                exclusive: true,
            }),
            (Some(ExclusiveBound::Flag(flag)), Some(value)) => Some(Self {
                value: format_number(value),
                exclusive: *flag,
            }),
            (_, Some(value)) => Some(Self {
                value: format_number(value),
                exclusive: false,
            }),
            (_, None) => None,
        }
    }
}

/// Constraint description builder
pub struct ConstraintHumanizer;

impl ConstraintHumanizer {
    /// Describe the constraints of a schema, in a fixed order:
    /// range, multiple-of, length, items, properties
    pub fn humanize_constraints(schema: &Schema) -> Vec<String> {
        let Some(object) = schema.as_object() else {
            return Vec::new();
        };

        let items_unit = if object.has_unique_items() {
            "unique items"
        } else {
            "items"
        };

        [
            Self::number_range(object),
            object.multiple_of.as_ref().map(Self::multiple_of),
            Self::count_range("characters", object.min_length, object.max_length),
            Self::count_range(items_unit, object.min_items, object.max_items),
            Self::count_range("properties", object.min_properties, object.max_properties),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn number_range(object: &SchemaObject) -> Option<String> {
        let min = Bound::resolve(object.minimum.as_ref(), object.exclusive_minimum.as_ref());
        let max = Bound::resolve(object.maximum.as_ref(), object.exclusive_maximum.as_ref());

        match (min, max) {
            (Some(min), Some(max)) => Some(format!(
                "{} {} .. {} {}",
                if min.exclusive { "(" } else { "[" },
                min.value,
                max.value,
                if max.exclusive { ")" } else { "]" },
            )),
            (Some(min), None) => Some(format!(
                "{} {}",
                if min.exclusive { ">" } else { ">=" },
                min.value
            )),
            (None, Some(max)) => Some(format!(
                "{} {}",
                if max.exclusive { "<" } else { "<=" },
                max.value
            )),
            (None, None) => None,
        }
    }

    fn multiple_of(value: &Number) -> String {
        let rendered = format_number(value);

        let fractional = value.as_f64().is_some_and(|v| v.fract() != 0.0);
        if fractional {
            if let Some(captures) = decimal_step_regex().captures(&rendered) {
                let places = match (captures.get(1), captures.get(2)) {
                    (Some(zeros), _) => Some(zeros.as_str().len() + 1),
                    (None, Some(exponent)) => exponent.as_str().parse().ok(),
                    (None, None) => None,
                };
                if let Some(places) = places {
                    return format!("decimal places <= {}", places);
                }
            }
        }

        format!("multiple of {}", rendered)
    }

    fn count_range(unit: &str, min: Option<u64>, max: Option<u64>) -> Option<String> {
        match (min, max) {
            (Some(min), Some(max)) if min == max => Some(format!("{} {}", min, unit)),
            (Some(min), Some(max)) => Some(format!("[ {} .. {} ] {}", min, max, unit)),
            (Some(1), None) => Some("non-empty".to_string()),
            (Some(min), None) => Some(format!(">= {} {}", min, unit)),
            (None, Some(max)) => Some(format!("<= {} {}", max, unit)),
            (None, None) => None,
        }
    }
}
