//! Tagged JavaScript value model.
//!
//! This crate provides the values a JavaScript kind classifier inspects:
//! primitives, boxed primitives, and the built-in object kinds, each as its
//! own variant of [`JsValue`].
//!
//! # Overview
//!
//! - [`JsValue`] - Tagged representation of JavaScript values
//! - [`ObjectData`] / [`FunctionData`] - Property tables and prototype links
//! - [`Realm`] - Per-thread `Object` constructor and `Object.prototype`
//! - [`JsError`] - Thrown exceptions, [`ValueError`] - construction failures
//!
//! # Examples
//!
//! ```
//! use core_types::JsValue;
//!
//! // function MyClass(name) { this.name = name }
//! let my_class = JsValue::function("MyClass", |this, args| {
//!     this.set("name", args.first().cloned().unwrap_or_default());
//!     Ok(JsValue::undefined())
//! });
//!
//! let instance = my_class.construct(&[JsValue::string("x")]).unwrap();
//! let constructor = instance.get("constructor").unwrap();
//! assert!(constructor.same_object(&my_class));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod chain;
mod date;
mod error;
mod object;
mod primitive;
mod promise;
mod realm;
mod regexp;
mod value;

pub use chain::PrototypeWalk;
pub use date::DateObject;
pub use error::{ChainError, ErrorKind, JsError, JsErrorObject, JsResult, ValueError};
pub use object::{ArrayData, FunctionData, NativeFn, ObjectData, Property, PropertyMap};
pub use primitive::{BigIntValue, BoxedPrimitive, SymbolValue};
pub use promise::{PromiseObject, PromiseState};
pub use realm::Realm;
pub use regexp::RegExpObject;
pub use value::JsValue;
