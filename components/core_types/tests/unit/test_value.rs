//! Unit tests for the JsValue enum

use core_types::{BoxedPrimitive, JsValue, PromiseState, Property, Realm};

#[cfg(test)]
mod value_creation_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_primitives() {
        assert!(JsValue::undefined().is_undefined());
        assert!(JsValue::null().is_null());
        assert!(JsValue::boolean(false).is_boolean());
        assert!(JsValue::number(f64::NAN).is_number());
        assert!(JsValue::string("").is_string());
        assert!(JsValue::symbol(Some("s")).is_primitive());
        assert!(JsValue::bigint(10).is_primitive());
    }

    #[test]
    fn test_boxed_primitives_are_objects() {
        let boxed = JsValue::boxed_string("even more in the string");
        assert!(boxed.is_boxed());
        assert!(!boxed.is_primitive());
        assert_eq!(boxed.type_of(), "object");
        assert_eq!(
            boxed.as_boxed(),
            Some(&BoxedPrimitive::String("even more in the string".to_string()))
        );
    }

    #[test]
    fn test_array_with_length() {
        let arr = JsValue::array_with_length(10);
        assert!(arr.is_array());
        assert_eq!(arr.array_length(), 10);
        assert_eq!(arr.to_js_string(), ",,,,,,,,,");
    }

    #[test]
    fn test_arguments_object() {
        let args = JsValue::arguments_from(vec![JsValue::number(1.0), JsValue::null()]);
        assert!(args.is_arguments());
        assert!(!args.is_array());
        assert_eq!(args.array_length(), 2);
        assert_eq!(args.to_js_string(), "[object Arguments]");
    }

    #[test]
    fn test_dates() {
        assert!(JsValue::date_now().is_date());
        let date = JsValue::date_parse("1981-01-03");
        assert_eq!(date.to_js_string(), "1981-01-03T00:00:00.000Z");
        assert_eq!(JsValue::date_parse("nope").to_js_string(), "Invalid Date");
    }

    #[test]
    fn test_regexp_display() {
        let re = JsValue::regexp("^needle$", "mi").unwrap();
        assert!(re.is_regexp());
        assert_eq!(re.to_js_string(), "/^needle$/im");
    }

    #[test]
    fn test_promises() {
        assert!(matches!(
            JsValue::promise_pending().promise_state(),
            Some(PromiseState::Pending)
        ));
        assert!(matches!(
            JsValue::promise_resolve(JsValue::string("data")).promise_state(),
            Some(PromiseState::Fulfilled(JsValue::String(ref s))) if s == "data"
        ));
    }
}

#[cfg(test)]
mod value_conversion_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_truthiness() {
        assert!(!JsValue::undefined().to_boolean());
        assert!(!JsValue::number(0.0).to_boolean());
        assert!(!JsValue::bigint(0).to_boolean());
        assert!(JsValue::number(0.5).to_boolean());
        assert!(JsValue::object().to_boolean());
        assert!(JsValue::boxed_boolean(false).to_boolean());
    }

    #[test]
    fn test_arithmetic_operands_that_produce_nan() {
        // {} - {}
        let lhs = JsValue::object().to_number().unwrap();
        let rhs = JsValue::object().to_number().unwrap();
        assert!((lhs - rhs).is_nan());
        // null / null
        let null = JsValue::null().to_number().unwrap();
        assert!((null / null).is_nan());
        // NaN + null
        assert!((f64::NAN + null).is_nan());
    }

    #[test]
    fn test_type_of_is_coarse() {
        assert_eq!(JsValue::array().type_of(), "object");
        assert_eq!(JsValue::date_now().type_of(), "object");
        assert_eq!(JsValue::null().type_of(), "object");
        assert_eq!(
            JsValue::function("f", |_this, _args| Ok(JsValue::undefined())).type_of(),
            "function"
        );
    }
}

#[cfg(test)]
mod object_model_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_prototype_object() {
        let bare = JsValue::object_with_proto(None);
        bare.set("foo", JsValue::string("bar"));
        assert!(bare.get_prototype().is_none());
        assert!(bare.get("constructor").unwrap().is_undefined());
        assert_eq!(bare.own_keys(), vec!["foo".to_string()]);
    }

    #[test]
    fn test_object_create_object_prototype() {
        let proto = Realm::with(|realm| realm.object_prototype().clone());
        let obj = JsValue::object_with_proto(Some(proto));
        let ctor = obj.get("constructor").unwrap();
        assert!(Realm::is_object_constructor(&ctor));
    }

    #[test]
    fn test_function_own_keys_exclude_name_and_prototype() {
        let ctor = JsValue::function("Widget", |_this, _args| Ok(JsValue::undefined()));
        ctor.construct(&[]).unwrap();
        ctor.set("version", JsValue::number(2.0));
        assert!(ctor.has_own("prototype"));
        assert!(ctor.has_own("name"));
        assert_eq!(ctor.own_keys(), vec!["version".to_string()]);
    }

    #[test]
    fn test_constructor_returning_object_overrides_instance() {
        let replacement = JsValue::array();
        let keep = replacement.clone();
        let ctor = JsValue::function("Factory", move |_this, _args| Ok(keep.clone()));
        let made = ctor.construct(&[]).unwrap();
        assert!(made.same_object(&replacement));
    }

    #[test]
    fn test_getter_failure_surfaces_from_get() {
        let obj = JsValue::object();
        obj.define_getter(
            "boom",
            JsValue::method("boom", |_this, _args| {
                Err(core_types::JsError::type_error("nope"))
            }),
        );
        assert!(matches!(obj.own_property("boom"), Some(Property::Accessor { .. })));
        assert!(obj.get("boom").is_err());
    }
}
