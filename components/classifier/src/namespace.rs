//! The classifier as a JavaScript value
//!
//! Scripts see the classifier as a single function that returns the tag name
//! of its first argument. Each fixed tag is also an own property of that
//! function, holding the matching boolean shortcut.

use core_types::JsValue;

use crate::classify::classify_arg;
use crate::registry::PredicateRegistry;

/// Build the callable classifier value.
///
/// # Examples
///
/// ```
/// use classifier::namespace::classifier_value;
/// use core_types::JsValue;
///
/// let kind_of = classifier_value();
/// let this = JsValue::undefined();
///
/// let tag = kind_of.call(&this, &[JsValue::array()]).unwrap();
/// assert_eq!(tag, JsValue::string("array"));
///
/// let is_array = kind_of.get("array").unwrap();
/// assert_eq!(is_array.call(&this, &[JsValue::array()]).unwrap(), JsValue::boolean(true));
/// ```
pub fn classifier_value() -> JsValue {
    let classifier = JsValue::function("classify", |_this, args| {
        Ok(JsValue::string(classify_arg(args.first()).as_str()))
    });

    for entry in PredicateRegistry::builtin() {
        let predicate = entry.predicate();
        let shortcut = JsValue::function(entry.name(), move |_this, args| {
            Ok(JsValue::boolean(predicate(args.first())))
        });
        classifier.set(entry.name(), shortcut);
    }

    classifier
}
