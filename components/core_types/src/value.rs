//! JavaScript value representation
//!
//! [`JsValue`] has one variant per structural kind a value can have. Code that
//! needs to tell values apart matches on the variant instead of probing for
//! capabilities at runtime.

use std::cell::{BorrowError, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::chain::PrototypeWalk;
use crate::date::DateObject;
use crate::error::{ErrorKind, JsError, JsErrorObject, JsResult, ValueError};
use crate::object::{ArrayData, FunctionData, ObjectData, Property};
use crate::primitive::{BigIntValue, BoxedPrimitive, SymbolValue};
use crate::promise::{PromiseObject, PromiseState};
use crate::realm::Realm;
use crate::regexp::RegExpObject;

/// JavaScript value representation
///
/// # Examples
///
/// ```
/// use core_types::JsValue;
///
/// let number = JsValue::number(42.0);
/// let boxed = JsValue::boxed_number(42.0);
///
/// assert_eq!(number.type_of(), "number");
/// assert_eq!(boxed.type_of(), "object");
/// assert!(boxed.is_boxed());
/// ```
#[derive(Debug, Clone, Default)]
pub enum JsValue {
    /// undefined, also standing in for "no argument"
    #[default]
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// String value
    String(String),
    /// Symbol value
    Symbol(SymbolValue),
    /// BigInt value (arbitrary precision integer)
    BigInt(BigIntValue),
    /// `new Boolean(..)`, `new Number(..)` or `new String(..)`
    Boxed(Rc<BoxedPrimitive>),
    /// Ordinary object with properties
    Object(Rc<RefCell<ObjectData>>),
    /// Array
    Array(Rc<RefCell<ArrayData>>),
    /// The `arguments` object of a function call
    Arguments(Rc<RefCell<ArrayData>>),
    /// Date object
    Date(Rc<RefCell<DateObject>>),
    /// Error object of any kind
    Error(Rc<RefCell<JsErrorObject>>),
    /// Function object
    Function(Rc<FunctionData>),
    /// Promise object
    Promise(Rc<RefCell<PromiseObject>>),
    /// RegExp object
    RegExp(Rc<RegExpObject>),
}

impl JsValue {
    /// Create undefined value
    pub fn undefined() -> Self {
        JsValue::Undefined
    }

    /// Create null value
    pub fn null() -> Self {
        JsValue::Null
    }

    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        JsValue::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        JsValue::Number(v)
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        JsValue::String(s.into())
    }

    /// Create a fresh symbol
    pub fn symbol(description: Option<&str>) -> Self {
        JsValue::Symbol(SymbolValue::new(description.map(str::to_string)))
    }

    /// Create a BigInt value
    pub fn bigint(value: impl Into<BigIntValue>) -> Self {
        JsValue::BigInt(value.into())
    }

    /// `new Boolean(value)`
    pub fn boxed_boolean(value: bool) -> Self {
        JsValue::Boxed(Rc::new(BoxedPrimitive::Boolean(value)))
    }

    /// `new Number(value)`
    pub fn boxed_number(value: f64) -> Self {
        JsValue::Boxed(Rc::new(BoxedPrimitive::Number(value)))
    }

    /// `new String(value)`
    pub fn boxed_string(value: impl Into<String>) -> Self {
        JsValue::Boxed(Rc::new(BoxedPrimitive::String(value.into())))
    }

    /// Create empty object inheriting from `Object.prototype`
    pub fn object() -> Self {
        let proto = Realm::with(|realm| realm.object_prototype().clone());
        Self::object_with_proto(Some(proto))
    }

    /// `Object.create(proto)`; None gives a null-prototype object
    pub fn object_with_proto(proto: Option<JsValue>) -> Self {
        JsValue::Object(Rc::new(RefCell::new(ObjectData::new(proto))))
    }

    /// Create empty array
    pub fn array() -> Self {
        Self::array_from(Vec::new())
    }

    /// Create array from values
    pub fn array_from(values: Vec<JsValue>) -> Self {
        JsValue::Array(Rc::new(RefCell::new(ArrayData { elements: values })))
    }

    /// `new Array(len)`
    pub fn array_with_length(len: usize) -> Self {
        Self::array_from(vec![JsValue::Undefined; len])
    }

    /// The `arguments` object for a call with these arguments
    pub fn arguments_from(values: Vec<JsValue>) -> Self {
        JsValue::Arguments(Rc::new(RefCell::new(ArrayData { elements: values })))
    }

    /// `new Date()`
    pub fn date_now() -> Self {
        Self::from_date(DateObject::now())
    }

    /// `new Date(ms)`
    pub fn date_from_millis(ms: f64) -> Self {
        Self::from_date(DateObject::from_millis(ms))
    }

    /// `new Date(string)`
    pub fn date_parse(s: &str) -> Self {
        Self::from_date(DateObject::parse(s))
    }

    /// Wrap a date payload
    pub fn from_date(date: DateObject) -> Self {
        JsValue::Date(Rc::new(RefCell::new(date)))
    }

    /// `new TypeError(message)` and friends
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::from_error(JsErrorObject::new(kind, message))
    }

    /// Create an error value from a JsErrorObject
    pub fn from_error(error: JsErrorObject) -> Self {
        JsValue::Error(Rc::new(RefCell::new(error)))
    }

    /// `new RegExp(pattern, flags)`
    pub fn regexp(pattern: &str, flags: &str) -> Result<Self, ValueError> {
        Ok(JsValue::RegExp(Rc::new(RegExpObject::new(pattern, flags)?)))
    }

    /// Create a constructible function, like a `function` declaration
    pub fn function<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    {
        JsValue::Function(Rc::new(FunctionData::new(name, true, body)))
    }

    /// Create a function that cannot be used with `new`, like a method or arrow
    pub fn method<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    {
        JsValue::Function(Rc::new(FunctionData::new(name, false, body)))
    }

    /// `new Promise(noop)`: a promise that never settles
    pub fn promise_pending() -> Self {
        Self::from_promise(PromiseObject::pending())
    }

    /// `Promise.resolve(value)`
    pub fn promise_resolve(value: JsValue) -> Self {
        Self::from_promise(PromiseObject::fulfilled(value))
    }

    /// `Promise.reject(reason)`
    pub fn promise_reject(reason: JsValue) -> Self {
        Self::from_promise(PromiseObject::rejected(reason))
    }

    fn from_promise(promise: PromiseObject) -> Self {
        JsValue::Promise(Rc::new(RefCell::new(promise)))
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    /// Check if value is a boolean primitive
    pub fn is_boolean(&self) -> bool {
        matches!(self, JsValue::Boolean(_))
    }

    /// Check if value is a number primitive
    pub fn is_number(&self) -> bool {
        matches!(self, JsValue::Number(_))
    }

    /// Check if value is a string primitive
    pub fn is_string(&self) -> bool {
        matches!(self, JsValue::String(_))
    }

    /// Check if value is a boxed primitive
    pub fn is_boxed(&self) -> bool {
        matches!(self, JsValue::Boxed(_))
    }

    /// Check if value is an ordinary object
    pub fn is_object(&self) -> bool {
        matches!(self, JsValue::Object(_))
    }

    /// Check if value is array
    pub fn is_array(&self) -> bool {
        matches!(self, JsValue::Array(_))
    }

    /// Check if value is an `arguments` object
    pub fn is_arguments(&self) -> bool {
        matches!(self, JsValue::Arguments(_))
    }

    /// Check if value is a date
    pub fn is_date(&self) -> bool {
        matches!(self, JsValue::Date(_))
    }

    /// Check if value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, JsValue::Error(_))
    }

    /// Check if value is a function
    pub fn is_function(&self) -> bool {
        matches!(self, JsValue::Function(_))
    }

    /// Check if value is a promise
    pub fn is_promise(&self) -> bool {
        matches!(self, JsValue::Promise(_))
    }

    /// Check if value is a RegExp
    pub fn is_regexp(&self) -> bool {
        matches!(self, JsValue::RegExp(_))
    }

    /// Check if value is a primitive (not a reference type)
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            JsValue::Undefined
                | JsValue::Null
                | JsValue::Boolean(_)
                | JsValue::Number(_)
                | JsValue::String(_)
                | JsValue::Symbol(_)
                | JsValue::BigInt(_)
        )
    }

    /// Get as number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the wrapped primitive of a boxed value
    pub fn as_boxed(&self) -> Option<&BoxedPrimitive> {
        match self {
            JsValue::Boxed(boxed) => Some(boxed),
            _ => None,
        }
    }

    /// Get as error object
    pub fn as_error(&self) -> Option<JsErrorObject> {
        match self {
            JsValue::Error(err) => Some(err.borrow().clone()),
            _ => None,
        }
    }

    /// Get the function internals
    pub fn as_function(&self) -> Option<&Rc<FunctionData>> {
        match self {
            JsValue::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Get the promise state
    pub fn promise_state(&self) -> Option<PromiseState> {
        match self {
            JsValue::Promise(promise) => Some(promise.borrow().state().clone()),
            _ => None,
        }
    }

    /// Get array or `arguments` length
    pub fn array_length(&self) -> usize {
        match self {
            JsValue::Array(arr) | JsValue::Arguments(arr) => arr.borrow().elements.len(),
            _ => 0,
        }
    }

    /// Whether both values are the same heap object
    pub fn same_object(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Boxed(a), JsValue::Boxed(b)) => Rc::ptr_eq(a, b),
            (JsValue::Object(a), JsValue::Object(b)) => Rc::ptr_eq(a, b),
            (JsValue::Array(a), JsValue::Array(b)) => Rc::ptr_eq(a, b),
            (JsValue::Arguments(a), JsValue::Arguments(b)) => Rc::ptr_eq(a, b),
            (JsValue::Date(a), JsValue::Date(b)) => Rc::ptr_eq(a, b),
            (JsValue::Error(a), JsValue::Error(b)) => Rc::ptr_eq(a, b),
            (JsValue::Function(a), JsValue::Function(b)) => Rc::ptr_eq(a, b),
            (JsValue::Promise(a), JsValue::Promise(b)) => Rc::ptr_eq(a, b),
            (JsValue::RegExp(a), JsValue::RegExp(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Set a data property. Ignored on values without a property table.
    pub fn set(&self, key: &str, value: JsValue) {
        match self {
            JsValue::Object(obj) => {
                obj.borrow_mut()
                    .properties
                    .insert(key.to_string(), Property::Data(value));
            }
            JsValue::Function(func) if key == "prototype" => {
                *func.prototype_slot().borrow_mut() = Some(value);
            }
            JsValue::Function(func) => {
                func.properties
                    .borrow_mut()
                    .insert(key.to_string(), Property::Data(value));
            }
            _ => {}
        }
    }

    /// Define a getter, as `Object.defineProperty(obj, key, { get })`
    pub fn define_getter(&self, key: &str, getter: JsValue) {
        let slot = Property::Accessor { get: getter };
        match self {
            JsValue::Object(obj) => {
                obj.borrow_mut().properties.insert(key.to_string(), slot);
            }
            JsValue::Function(func) => {
                func.properties.borrow_mut().insert(key.to_string(), slot);
            }
            _ => {}
        }
    }

    /// Look up an own property without invoking getters
    ///
    /// Fails only if the property table is currently mutably borrowed.
    pub fn try_own_property(&self, key: &str) -> Result<Option<Property>, BorrowError> {
        match self {
            JsValue::Object(obj) => Ok(obj.try_borrow()?.properties.get(key).cloned()),
            JsValue::Function(func) if key == "name" => {
                Ok(Some(Property::Data(JsValue::string(func.name()))))
            }
            JsValue::Function(func) if key == "prototype" => {
                Ok(func.prototype_slot().try_borrow()?.clone().map(Property::Data))
            }
            JsValue::Function(func) => Ok(func.properties.try_borrow()?.get(key).cloned()),
            _ => Ok(None),
        }
    }

    /// Look up an own property without invoking getters
    pub fn own_property(&self, key: &str) -> Option<Property> {
        self.try_own_property(key).ok().flatten()
    }

    /// Check if the value has an own property
    pub fn has_own(&self, key: &str) -> bool {
        self.own_property(key).is_some()
    }

    /// Own property keys in insertion order, as `Object.keys` reports them
    pub fn own_keys(&self) -> Vec<String> {
        match self {
            JsValue::Object(obj) => obj.borrow().properties.keys().cloned().collect(),
            JsValue::Function(func) => func.properties.borrow().keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// `Object.getPrototypeOf(value)`, failing if the object is mutably borrowed
    pub fn try_prototype(&self) -> Result<Option<JsValue>, BorrowError> {
        match self {
            JsValue::Object(obj) => Ok(obj.try_borrow()?.prototype.clone()),
            _ => Ok(None),
        }
    }

    /// `Object.getPrototypeOf(value)`
    pub fn get_prototype(&self) -> Option<JsValue> {
        self.try_prototype().ok().flatten()
    }

    /// `Object.setPrototypeOf(value, proto)`
    ///
    /// Returns false without changing anything if `value` is not an ordinary
    /// object, if the new link would close a cycle, or if the new chain cannot
    /// be walked.
    pub fn set_prototype(&self, proto: Option<JsValue>) -> bool {
        let JsValue::Object(obj) = self else {
            return false;
        };
        if let Some(first) = &proto {
            let mut walk = PrototypeWalk::new(first);
            loop {
                match walk.try_next() {
                    Ok(Some(link)) if link.same_object(self) => return false,
                    Ok(Some(_)) => {}
                    Ok(None) => break,
                    Err(_) => return false,
                }
            }
        }
        match obj.try_borrow_mut() {
            Ok(mut data) => {
                data.prototype = proto;
                true
            }
            Err(_) => false,
        }
    }

    /// `value[key]`: walks the prototype chain and runs getters
    ///
    /// A cyclic chain throws a RangeError, a chain object that is being
    /// mutated throws a TypeError.
    pub fn get(&self, key: &str) -> JsResult<JsValue> {
        let mut walk = PrototypeWalk::new(self);
        while let Some(holder) = walk.try_next()? {
            match holder.own_property(key) {
                Some(Property::Data(value)) => return Ok(value),
                Some(Property::Accessor { get }) => return get.call(self, &[]),
                None => {}
            }
        }
        Ok(JsValue::Undefined)
    }

    /// Call the value as a function
    pub fn call(&self, this: &JsValue, args: &[JsValue]) -> JsResult<JsValue> {
        match self {
            JsValue::Function(func) => func.invoke(this, args),
            other => Err(JsError::type_error(format!(
                "{} is not a function",
                other.to_js_string()
            ))),
        }
    }

    /// `new F(...args)`
    ///
    /// The new object inherits from `F.prototype`, which is created on first
    /// use with a `constructor` link back to `F`.
    pub fn construct(&self, args: &[JsValue]) -> JsResult<JsValue> {
        let func = match self {
            JsValue::Function(func) if func.is_constructor() => func,
            other => {
                return Err(JsError::type_error(format!(
                    "{} is not a constructor",
                    other.to_js_string()
                )))
            }
        };

        let existing = func.prototype_slot().borrow().clone();
        let proto = match existing {
            Some(proto) if !proto.is_primitive() => proto,
            // A primitive `F.prototype` falls back to Object.prototype
            Some(_) => Realm::with(|realm| realm.object_prototype().clone()),
            None => {
                // F.prototype.constructor holds F strongly, so a constructor
                // that has built an instance is never freed
                let proto = JsValue::object();
                proto.set("constructor", self.clone());
                *func.prototype_slot().borrow_mut() = Some(proto.clone());
                proto
            }
        };

        let instance = JsValue::object_with_proto(Some(proto));
        let result = func.invoke(&instance, args)?;
        if result.is_primitive() {
            Ok(instance)
        } else {
            Ok(result)
        }
    }

    /// `promise.catch(handler)`
    ///
    /// Returns a new promise. A rejected source runs the handler immediately
    /// and fulfills with its result.
    pub fn promise_catch(&self, handler: &JsValue) -> JsResult<JsValue> {
        let JsValue::Promise(promise) = self else {
            return Err(JsError::type_error(format!(
                "{} is not a promise",
                self.to_js_string()
            )));
        };
        let state = promise.borrow().state().clone();
        match state {
            PromiseState::Pending => Ok(JsValue::promise_pending()),
            PromiseState::Fulfilled(value) => Ok(JsValue::promise_resolve(value)),
            PromiseState::Rejected(reason) => match handler.call(&JsValue::Undefined, &[reason]) {
                Ok(value) => Ok(JsValue::promise_resolve(value)),
                Err(thrown) => Ok(JsValue::promise_reject(thrown.into_value())),
            },
        }
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::JsValue;
    ///
    /// assert!(!JsValue::number(f64::NAN).to_boolean());
    /// assert!(!JsValue::string("").to_boolean());
    /// assert!(JsValue::boxed_boolean(false).to_boolean());
    /// ```
    pub fn to_boolean(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Boolean(b) => *b,
            JsValue::Number(n) => !n.is_nan() && *n != 0.0,
            JsValue::String(s) => !s.is_empty(),
            JsValue::BigInt(n) => !n.is_zero(),
            // Every object is truthy, including `new Boolean(false)`
            _ => true,
        }
    }

    /// JavaScript `ToNumber`
    ///
    /// Symbols and BigInts throw a TypeError, as they do in `+value`.
    pub fn to_number(&self) -> JsResult<f64> {
        match self {
            JsValue::Undefined => Ok(f64::NAN),
            JsValue::Null => Ok(0.0),
            JsValue::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            JsValue::Number(n) => Ok(*n),
            JsValue::String(s) => Ok(string_to_number(s)),
            JsValue::Symbol(_) => Err(JsError::type_error(
                "Cannot convert a Symbol value to a number",
            )),
            JsValue::BigInt(_) => Err(JsError::type_error(
                "Cannot convert a BigInt value to a number",
            )),
            JsValue::Boxed(boxed) => boxed.value_of().to_number(),
            JsValue::Date(date) => Ok(date.borrow().time_value()),
            JsValue::Array(_) | JsValue::Arguments(_) => Ok(string_to_number(&self.to_js_string())),
            _ => Ok(f64::NAN),
        }
    }

    /// Convert to string representation, as `String(value)` does
    pub fn to_js_string(&self) -> String {
        match self {
            JsValue::Undefined => "undefined".to_string(),
            JsValue::Null => "null".to_string(),
            JsValue::Boolean(b) => b.to_string(),
            JsValue::Number(n) => number_to_string(*n),
            JsValue::String(s) => s.clone(),
            JsValue::Symbol(sym) => sym.to_string(),
            JsValue::BigInt(n) => n.to_string(),
            JsValue::Boxed(boxed) => boxed.value_of().to_js_string(),
            JsValue::Object(_) => "[object Object]".to_string(),
            JsValue::Array(arr) => {
                let elements: Vec<String> = arr
                    .borrow()
                    .elements
                    .iter()
                    .map(|e| match e {
                        JsValue::Undefined | JsValue::Null => String::new(),
                        other => other.to_js_string(),
                    })
                    .collect();
                elements.join(",")
            }
            JsValue::Arguments(_) => "[object Arguments]".to_string(),
            JsValue::Date(date) => date
                .borrow()
                .to_iso_string()
                .unwrap_or_else(|| "Invalid Date".to_string()),
            JsValue::Error(err) => err.borrow().to_string(),
            JsValue::Function(func) => format!("function {}() {{ [native code] }}", func.name()),
            JsValue::Promise(_) => "[object Promise]".to_string(),
            JsValue::RegExp(re) => re.to_string(),
        }
    }

    /// Get the type of the value (as JavaScript typeof would return)
    pub fn type_of(&self) -> &'static str {
        match self {
            JsValue::Undefined => "undefined",
            JsValue::Null => "object", // typeof null === "object" in JavaScript
            JsValue::Boolean(_) => "boolean",
            JsValue::Number(_) => "number",
            JsValue::String(_) => "string",
            JsValue::Symbol(_) => "symbol",
            JsValue::BigInt(_) => "bigint",
            JsValue::Function(_) => "function",
            _ => "object",
        }
    }

    /// Strict equality (`===`)
    pub fn strict_equals(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            // NaN !== NaN falls out of f64 comparison
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
            (JsValue::BigInt(a), JsValue::BigInt(b)) => a == b,
            (a, b) => a.same_object(b),
        }
    }
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js_string())
    }
}

fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let sign = if n > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if n == n.trunc() && n.abs() < 1e15 {
        // Integer-valued doubles display without decimal point (and -0 as 0)
        format!("{}", n as i64)
    } else {
        let mut buffer = ryu::Buffer::new();
        buffer.format_finite(n).to_string()
    }
}

fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    let lower = trimmed.to_ascii_lowercase();
    let radix_digits = [("0x", 16), ("0o", 8), ("0b", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| lower.strip_prefix(prefix).map(|digits| (digits, radix)));
    if let Some((digits, radix)) = radix_digits {
        return u64::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }
    // Rust accepts "inf" and "nan" spellings that JavaScript rejects
    if lower.contains("inf") || lower.contains("nan") {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
