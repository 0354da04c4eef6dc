//! Primitives, boxed primitives and non-finite numbers

use classifier::{classify, classify_arg, Tag};
use core_types::JsValue;

#[cfg(test)]
mod boolean_tests {
    use super::*;

    #[test]
    fn test_boolean_literals() {
        assert_eq!(classify(&JsValue::boolean(true)), Tag::Boolean);
        assert_eq!(classify(&JsValue::boolean(false)), Tag::Boolean);
    }

    #[test]
    fn test_negated_values_are_booleans() {
        // !!{ foo: 'bar' }, !0, !null, !undefined
        let obj = JsValue::object();
        obj.set("foo", JsValue::string("bar"));
        for operand in [obj, JsValue::number(0.0), JsValue::null(), JsValue::undefined()] {
            let negated = JsValue::boolean(!operand.to_boolean());
            assert_eq!(classify(&negated), Tag::Boolean);
        }
    }

    #[test]
    fn test_boxed_booleans() {
        // new Boolean(1 / 2), new Boolean(100 - 100)
        let half = JsValue::number(0.5).to_boolean();
        let zero = JsValue::number(0.0).to_boolean();
        assert_eq!(classify(&JsValue::boxed_boolean(half)), Tag::Boolean);
        assert_eq!(classify(&JsValue::boxed_boolean(zero)), Tag::Boolean);
    }
}

#[cfg(test)]
mod sentinel_tests {
    use super::*;

    #[test]
    fn test_null() {
        assert_eq!(classify(&JsValue::null()), Tag::Null);
    }

    #[test]
    fn test_undefined_explicit_and_absent() {
        assert_eq!(classify(&JsValue::undefined()), Tag::Undefined);
        assert_eq!(classify_arg(None), Tag::Undefined);
        assert_eq!(classify_arg(Some(&JsValue::undefined())), Tag::Undefined);
    }
}

#[cfg(test)]
mod number_tests {
    use super::*;

    #[test]
    fn test_finite_numbers() {
        let samples = [
            42.0,
            -1.0,
            0.0,
            -0.0,
            std::f64::consts::PI,
            0x1123 as f64,
            0x00111 as f64,
            -(0xF1A7 as f64),
            -3.1e12,
            0.1e-23,
            f64::MAX,
            f64::MIN_POSITIVE,
        ];
        for n in samples {
            assert_eq!(classify(&JsValue::number(n)), Tag::Number, "{}", n);
        }
    }

    #[test]
    fn test_parsed_and_boxed_numbers() {
        let parsed = JsValue::string("1.234").to_number().unwrap();
        assert_eq!(classify(&JsValue::number(parsed)), Tag::Number);
        assert_eq!(classify(&JsValue::boxed_number(1024.0)), Tag::Number);
    }

    #[test]
    fn test_nan_from_arithmetic() {
        let null = JsValue::null().to_number().unwrap();
        let empty = JsValue::object().to_number().unwrap();
        let samples = [
            f64::NAN,
            -f64::NAN,
            f64::NAN - f64::NAN,
            f64::NAN + null,
            null - f64::NAN,
            f64::NAN + 1.0,
            null / null,
            empty - empty,
        ];
        for n in samples {
            assert_eq!(classify(&JsValue::number(n)), Tag::NaN);
        }
    }

    #[test]
    fn test_infinity_either_sign() {
        assert_eq!(classify(&JsValue::number(f64::INFINITY)), Tag::Infinity);
        assert_eq!(classify(&JsValue::number(f64::NEG_INFINITY)), Tag::Infinity);
        assert_eq!(classify(&JsValue::number(1.0 / 0.0)), Tag::Infinity);
    }

    #[test]
    fn test_boxing_does_not_hide_non_finite_values() {
        assert_eq!(classify(&JsValue::boxed_number(0.0 / 0.0)), Tag::NaN);
        assert_eq!(classify(&JsValue::boxed_number(-1.0 / 0.0)), Tag::Infinity);
    }
}

#[cfg(test)]
mod string_tests {
    use super::*;

    #[test]
    fn test_strings() {
        let joined = ["even", "more", "in", "the", "string"].join(" ");
        assert_eq!(classify(&JsValue::string("")), Tag::String);
        assert_eq!(classify(&JsValue::string("string")), Tag::String);
        assert_eq!(classify(&JsValue::string(joined.clone())), Tag::String);
        assert_eq!(classify(&JsValue::boxed_string(joined)), Tag::String);
    }
}
