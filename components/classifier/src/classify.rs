//! The classification cascade
//!
//! Checks run in a fixed order and the first match wins:
//!
//! 1. undefined, then null
//! 2. boolean, number and string, looking through boxed wrappers. Numbers
//!    split into `NaN`, `Infinity` and `number`.
//! 3. arguments, array, date, error, function, promise, regexp
//! 4. everything else is named after its constructor, or `object`

use core_types::{BoxedPrimitive, JsValue};
use tracing::{debug, trace};

use crate::resolver::{ConstructorName, PrototypeChainResolver, TypeNameResolver};
use crate::tag::Tag;

/// Primitive kind of a value after unwrapping boxed primitives
enum PrimitiveKind {
    Boolean,
    Number(f64),
    String,
}

fn primitive_kind(value: &JsValue) -> Option<PrimitiveKind> {
    match value {
        JsValue::Boolean(_) => Some(PrimitiveKind::Boolean),
        JsValue::Number(n) => Some(PrimitiveKind::Number(*n)),
        JsValue::String(_) => Some(PrimitiveKind::String),
        JsValue::Boxed(boxed) => Some(match **boxed {
            BoxedPrimitive::Boolean(_) => PrimitiveKind::Boolean,
            BoxedPrimitive::Number(n) => PrimitiveKind::Number(n),
            BoxedPrimitive::String(_) => PrimitiveKind::String,
        }),
        _ => None,
    }
}

fn number_tag(n: f64) -> Tag {
    if n.is_nan() {
        Tag::NaN
    } else if n.is_infinite() {
        Tag::Infinity
    } else {
        Tag::Number
    }
}

/// Maps values to [`Tag`]s.
///
/// The resolver is only consulted for values no fixed tag covers.
///
/// # Examples
///
/// ```
/// use classifier::{Classifier, Tag};
/// use core_types::JsValue;
///
/// let classifier = Classifier::new();
/// assert_eq!(classifier.classify(&JsValue::boxed_number(f64::NAN)), Tag::NaN);
/// assert_eq!(classifier.classify_arg(None), Tag::Undefined);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier<R = PrototypeChainResolver> {
    resolver: R,
}

impl Classifier {
    /// Classifier with the prototype chain resolver
    pub const fn new() -> Self {
        Classifier {
            resolver: PrototypeChainResolver,
        }
    }
}

impl<R: TypeNameResolver> Classifier<R> {
    /// Classifier with a custom constructor name resolver
    pub fn with_resolver(resolver: R) -> Self {
        Classifier { resolver }
    }

    /// Tag of `value`. Never fails.
    pub fn classify(&self, value: &JsValue) -> Tag {
        match value {
            JsValue::Undefined => return Tag::Undefined,
            JsValue::Null => return Tag::Null,
            _ => {}
        }

        match primitive_kind(value) {
            Some(PrimitiveKind::Boolean) => return Tag::Boolean,
            Some(PrimitiveKind::Number(n)) => return number_tag(n),
            Some(PrimitiveKind::String) => return Tag::String,
            None => {}
        }

        match value {
            JsValue::Arguments(_) => Tag::Arguments,
            JsValue::Array(_) => Tag::Array,
            JsValue::Date(_) => Tag::Date,
            JsValue::Error(_) => Tag::Error,
            JsValue::Function(_) => Tag::Function,
            JsValue::Promise(_) => Tag::Promise,
            JsValue::RegExp(_) => Tag::RegExp,
            // Ordinary objects, symbols and bigints
            _ => self.constructor_tag(value),
        }
    }

    /// Tag of an optional argument; a missing argument is `undefined`
    pub fn classify_arg(&self, value: Option<&JsValue>) -> Tag {
        value.map_or(Tag::Undefined, |value| self.classify(value))
    }

    fn constructor_tag(&self, value: &JsValue) -> Tag {
        match self.resolver.resolve(value) {
            Ok(ConstructorName::Named(name)) => {
                let tag = Tag::from_constructor_name(&name);
                trace!(constructor = %name, tag = %tag, "derived tag from constructor name");
                tag
            }
            Ok(ConstructorName::BaseObject | ConstructorName::Absent | ConstructorName::Anonymous) => {
                Tag::Object
            }
            Err(err) => {
                debug!(error = %err, "constructor lookup failed, falling back to object");
                Tag::Object
            }
        }
    }
}

/// Tag of `value` using the default classifier
///
/// # Examples
///
/// ```
/// use classifier::{classify, Tag};
/// use core_types::JsValue;
///
/// assert_eq!(classify(&JsValue::number(1.0 / 0.0)), Tag::Infinity);
/// assert_eq!(classify(&JsValue::array()).as_str(), "array");
/// ```
pub fn classify(value: &JsValue) -> Tag {
    Classifier::new().classify(value)
}

/// Tag of an optional argument using the default classifier
pub fn classify_arg(value: Option<&JsValue>) -> Tag {
    Classifier::new().classify_arg(value)
}
