//! The classifier exposed as a function value with predicate properties

use classifier::namespace::classifier_value;
use classifier::{classify, PredicateRegistry, Tag};
use core_types::JsValue;

use super::corpus;

#[cfg(test)]
mod shortcut_method_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Contract: shortcut properties are discovered by enumeration and each
    /// one is a function returning a boolean
    #[test]
    fn test_every_own_key_is_a_boolean_shortcut() {
        let namespace = classifier_value();
        let this = JsValue::undefined();
        for key in namespace.own_keys() {
            let shortcut = namespace.get(&key).unwrap();
            assert_eq!(classify(&shortcut), Tag::Function, ".{}", key);

            let result = shortcut.call(&this, &[]).unwrap();
            assert_eq!(classify(&result), Tag::Boolean, ".{}()", key);
            assert_eq!(
                result,
                JsValue::boolean(key == "undefined"),
                ".{}()",
                key
            );
        }
    }

    /// Contract: the enumerable properties are exactly the fixed tags
    #[test]
    fn test_own_keys_match_fixed_vocabulary() {
        let keys = classifier_value().own_keys();
        let fixed: Vec<String> = Tag::fixed().iter().map(Tag::to_string).collect();
        assert_eq!(keys, fixed);
    }

    /// Contract: calling a shortcut equals comparing the call result
    #[test]
    fn test_shortcuts_agree_with_call() {
        let namespace = classifier_value();
        let this = JsValue::undefined();
        for value in corpus::values() {
            let tag = namespace.call(&this, &[value.clone()]).unwrap();
            for entry in PredicateRegistry::builtin() {
                let shortcut = namespace.get(entry.name()).unwrap();
                let answer = shortcut.call(&this, &[value.clone()]).unwrap();
                assert_eq!(answer, JsValue::boolean(tag == JsValue::string(entry.name())));
            }
        }
    }

    /// Contract: the classifier recognizes itself as a function
    #[test]
    fn test_self_classification() {
        let namespace = classifier_value();
        let result = namespace
            .call(&JsValue::undefined(), &[namespace.clone()])
            .unwrap();
        assert_eq!(result, JsValue::string("function"));
    }
}
