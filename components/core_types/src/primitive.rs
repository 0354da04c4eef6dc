//! Primitive payloads that need more than a plain Rust scalar.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use num_bigint::BigInt as NumBigInt;
use num_traits::Zero;

use crate::value::JsValue;

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(1);

/// A unique JavaScript symbol
///
/// Every call to [`SymbolValue::new`] produces a distinct symbol, even when
/// the descriptions match.
#[derive(Debug, Clone)]
pub struct SymbolValue {
    id: u64,
    description: Option<String>,
}

impl SymbolValue {
    /// Create a fresh symbol
    pub fn new(description: Option<String>) -> Self {
        SymbolValue {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description,
        }
    }

    /// Symbol description, if one was given
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

/// BigInt value wrapper for arbitrary precision integers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigIntValue {
    inner: NumBigInt,
}

impl BigIntValue {
    /// Create a new BigIntValue from a NumBigInt
    pub fn new(inner: NumBigInt) -> Self {
        BigIntValue { inner }
    }

    /// Whether this is `0n`
    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }
}

impl From<i64> for BigIntValue {
    fn from(n: i64) -> Self {
        BigIntValue::new(NumBigInt::from(n))
    }
}

impl fmt::Display for BigIntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Object wrapper around a single primitive
///
/// Produced by `new Boolean(..)`, `new Number(..)` and `new String(..)`.
#[derive(Debug, Clone, PartialEq)]
pub enum BoxedPrimitive {
    /// `new Boolean(..)`
    Boolean(bool),
    /// `new Number(..)`
    Number(f64),
    /// `new String(..)`
    String(String),
}

impl BoxedPrimitive {
    /// `valueOf()`: the wrapped primitive
    pub fn value_of(&self) -> JsValue {
        match self {
            BoxedPrimitive::Boolean(b) => JsValue::Boolean(*b),
            BoxedPrimitive::Number(n) => JsValue::Number(*n),
            BoxedPrimitive::String(s) => JsValue::String(s.clone()),
        }
    }
}
