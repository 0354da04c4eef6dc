//! Precise kind tags for JavaScript values.
//!
//! `typeof` lumps arrays, dates, regular expressions, `null` and every
//! instance of a user class together as `"object"`, and reports NaN as a
//! `"number"`. This crate refines that into a [`Tag`]:
//!
//! - primitives: `boolean`, `null`, `undefined`, `number`, `string`, with
//!   boxed primitives reported like the primitive they wrap
//! - non-finite numbers: `NaN` and `Infinity`
//! - built-in objects: `arguments`, `array`, `date`, `error`, `function`,
//!   `promise`, `regexp`
//! - `object` for plain objects, and otherwise the lower-cased name of the
//!   value's constructor (`myclass` for `new MyClass()`)
//!
//! Each fixed tag also has a boolean shortcut ([`is_nan`], [`is_array`], ...)
//! collected in the [`PredicateRegistry`].
//!
//! # Examples
//!
//! ```
//! use classifier::{classify, is_nan, Tag};
//! use core_types::JsValue;
//!
//! assert_eq!(classify(&JsValue::boxed_string("s")), Tag::String);
//! assert_eq!(classify(&JsValue::null()), Tag::Null);
//! assert!(is_nan(Some(&JsValue::number(f64::NAN))));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod classify;
pub mod namespace;
mod registry;
mod resolver;
mod tag;

pub use classify::{classify, classify_arg, Classifier};
pub use registry::{
    is_arguments, is_array, is_boolean, is_date, is_error, is_function, is_infinity, is_nan,
    is_null, is_number, is_object, is_promise, is_regexp, is_string, is_undefined, Predicate,
    PredicateEntry, PredicateRegistry,
};
pub use resolver::{
    ConstructorName, PrototypeChainResolver, ResolveError, TypeNameResolver, MAX_GETTER_NESTING,
};
pub use tag::Tag;
