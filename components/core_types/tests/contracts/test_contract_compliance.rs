//! Contract compliance tests for core_types
//!
//! The classifier matches on JsValue variants, so every structural kind a
//! JavaScript program can produce must map to exactly one variant.

use core_types::{ErrorKind, JsError, JsValue};

#[cfg(test)]
mod value_contract_tests {
    use super::*;

    fn variant_count(value: &JsValue) -> usize {
        [
            value.is_undefined(),
            value.is_null(),
            value.is_boolean(),
            value.is_number(),
            value.is_string(),
            value.is_boxed(),
            value.is_object(),
            value.is_array(),
            value.is_arguments(),
            value.is_date(),
            value.is_error(),
            value.is_function(),
            value.is_promise(),
            value.is_regexp(),
            matches!(value, JsValue::Symbol(_) | JsValue::BigInt(_)),
        ]
        .iter()
        .filter(|hit| **hit)
        .count()
    }

    fn sample_values() -> Vec<JsValue> {
        let noop = JsValue::function("noop", |_this, _args| Ok(JsValue::undefined()));
        vec![
            JsValue::undefined(),
            JsValue::null(),
            JsValue::boolean(true),
            JsValue::number(f64::INFINITY),
            JsValue::string("s"),
            JsValue::symbol(None),
            JsValue::bigint(1),
            JsValue::boxed_number(f64::NAN),
            JsValue::object(),
            JsValue::object_with_proto(None),
            JsValue::array(),
            JsValue::arguments_from(vec![]),
            JsValue::date_now(),
            JsValue::error(ErrorKind::TypeError, "t"),
            noop.clone(),
            noop.construct(&[]).unwrap(),
            JsValue::promise_pending(),
            JsValue::regexp("x", "").unwrap(),
        ]
    }

    /// Contract: each value answers exactly one structural predicate
    #[test]
    fn test_each_value_has_exactly_one_kind() {
        for value in sample_values() {
            assert_eq!(variant_count(&value), 1, "{:?}", value);
        }
    }

    /// Contract: classification-relevant reads never panic on any kind
    #[test]
    fn test_reads_are_total() {
        for value in sample_values() {
            let _ = value.get_prototype();
            let _ = value.own_property("constructor");
            let _ = value.own_keys();
            let _ = value.to_js_string();
            let _ = value.type_of();
        }
    }

    /// Contract: a caught exception is an error value
    #[test]
    fn test_thrown_errors_convert_to_error_values() {
        let value = JsError::syntax_error("bad").into_value();
        assert_eq!(variant_count(&value), 1);
        assert!(value.is_error());
    }
}
