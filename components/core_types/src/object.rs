//! Object and function internals
//!
//! Ordinary objects and functions both carry an own-property table. Keys
//! keep insertion order, which is the order `Object.keys` reports.

use std::cell::RefCell;
use std::fmt;

use indexmap::IndexMap;

use crate::error::JsResult;
use crate::value::JsValue;

/// An own property slot
#[derive(Debug, Clone)]
pub enum Property {
    /// Plain value
    Data(JsValue),
    /// Getter function, invoked with the receiver as `this`
    Accessor {
        /// The getter
        get: JsValue,
    },
}

/// Own properties in insertion order
pub type PropertyMap = IndexMap<String, Property>;

/// Internal object data
#[derive(Clone, Default)]
pub struct ObjectData {
    /// Own properties
    pub properties: PropertyMap,
    /// `[[Prototype]]`, None for `Object.create(null)`. Written only through
    /// [`JsValue::set_prototype`] so the link is cycle-checked.
    pub(crate) prototype: Option<JsValue>,
}

impl ObjectData {
    /// Create empty object data with the given prototype
    pub fn new(prototype: Option<JsValue>) -> Self {
        ObjectData {
            properties: PropertyMap::new(),
            prototype,
        }
    }

    /// `[[Prototype]]`
    pub fn prototype(&self) -> Option<&JsValue> {
        self.prototype.as_ref()
    }
}

// Prototype chains loop back through `constructor`, so only keys are printed.
impl fmt::Debug for ObjectData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectData")
            .field("keys", &self.properties.keys().collect::<Vec<_>>())
            .field("has_prototype", &self.prototype.is_some())
            .finish()
    }
}

/// Internal array data, shared by arrays and `arguments` objects
#[derive(Debug, Clone, Default)]
pub struct ArrayData {
    /// Array elements
    pub elements: Vec<JsValue>,
}

/// Signature of a native function body: `(this, args) -> result`
pub type NativeFn = dyn Fn(&JsValue, &[JsValue]) -> JsResult<JsValue>;

/// Internal function data
pub struct FunctionData {
    name: String,
    body: Box<NativeFn>,
    constructible: bool,
    /// Own properties other than `name` and `prototype`
    pub properties: RefCell<PropertyMap>,
    /// `F.prototype`, created on first construction if never assigned
    prototype: RefCell<Option<JsValue>>,
}

impl FunctionData {
    /// Create a function with the given name and body
    pub fn new<F>(name: impl Into<String>, constructible: bool, body: F) -> Self
    where
        F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    {
        FunctionData {
            name: name.into(),
            body: Box::new(body),
            constructible,
            properties: RefCell::new(PropertyMap::new()),
            prototype: RefCell::new(None),
        }
    }

    /// Declared name, empty for anonymous functions
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `new` may be applied to this function
    pub fn is_constructor(&self) -> bool {
        self.constructible
    }

    /// Run the body
    pub fn invoke(&self, this: &JsValue, args: &[JsValue]) -> JsResult<JsValue> {
        (self.body)(this, args)
    }

    /// The `prototype` property slot
    pub fn prototype_slot(&self) -> &RefCell<Option<JsValue>> {
        &self.prototype
    }
}

impl fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionData")
            .field("name", &self.name)
            .field("constructible", &self.constructible)
            .finish()
    }
}
