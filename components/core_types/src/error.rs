//! JavaScript error values and the Rust-side error types of the value model.
//!
//! - [`JsErrorObject`] is the payload of an `Error` *value* (what `new Error()` creates)
//! - [`JsError`] is a thrown exception travelling through a Rust `Result`
//! - [`ValueError`] reports a value that could not be built at all
//! - [`ChainError`] reports a prototype chain that could not be walked

use std::cell::BorrowError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::value::JsValue;

/// The kind of JavaScript error.
///
/// These correspond to JavaScript's built-in error constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Generic Error
    Error,
    /// Type error (e.g., calling a non-function)
    TypeError,
    /// Reference to an undefined variable
    ReferenceError,
    /// Syntax error in JavaScript code
    SyntaxError,
    /// Value out of allowed range
    RangeError,
    /// Error in URI handling functions
    URIError,
    /// Error in eval() function
    EvalError,
    /// Multiple errors combined
    AggregateError,
}

impl ErrorKind {
    /// Get the constructor name of this error kind
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::URIError => "URIError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::AggregateError => "AggregateError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// JavaScript Error object representation
///
/// # Examples
///
/// ```
/// use core_types::{ErrorKind, JsErrorObject};
///
/// let error = JsErrorObject::new(ErrorKind::RangeError, "WHA?!");
/// assert_eq!(error.to_string(), "RangeError: WHA?!");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsErrorObject {
    kind: ErrorKind,
    /// Custom error name (can be overwritten)
    name: String,
    message: String,
}

impl JsErrorObject {
    /// Create a new error object
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsErrorObject {
            kind,
            name: kind.name().to_string(),
            message: message.into(),
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Overwrite the error name, as `err.name = "..."` does
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for JsErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

/// A thrown JavaScript exception.
///
/// Native function bodies and property getters report failure with this
/// type. Catching it and turning it back into a value gives the `e` of a
/// `catch (e)` clause.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}: {message}")]
pub struct JsError {
    /// The type of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl JsError {
    /// Create a new exception of the given kind
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsError {
            kind,
            message: message.into(),
        }
    }

    /// Create a TypeError
    pub fn type_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::TypeError, message)
    }

    /// Create a ReferenceError
    pub fn reference_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::ReferenceError, message)
    }

    /// Create a SyntaxError
    pub fn syntax_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::SyntaxError, message)
    }

    /// Create a RangeError
    pub fn range_error(message: impl Into<String>) -> Self {
        JsError::new(ErrorKind::RangeError, message)
    }

    /// Convert the caught exception into an `Error` value
    pub fn into_value(self) -> JsValue {
        JsValue::from_error(JsErrorObject::new(self.kind, self.message))
    }
}

/// Result type for JavaScript operations
pub type JsResult<T> = Result<T, JsError>;

/// Errors raised while building a value from Rust.
#[derive(Debug, Error)]
pub enum ValueError {
    /// The RegExp source did not compile
    #[error("invalid regular expression /{pattern}/: {source}")]
    InvalidPattern {
        /// Pattern as written by the caller
        pattern: String,
        /// Underlying compiler error
        #[source]
        source: regex::Error,
    },
    /// Unknown or repeated RegExp flag
    #[error("invalid regular expression flags '{0}'")]
    InvalidFlags(String),
}

impl From<ValueError> for JsError {
    fn from(err: ValueError) -> Self {
        JsError::syntax_error(err.to_string())
    }
}

/// Why a prototype chain walk stopped early
#[derive(Debug, Error)]
pub enum ChainError {
    /// An object on the chain is being mutated
    #[error("object is already mutably borrowed")]
    Borrowed(#[from] BorrowError),
    /// The chain loops back on itself
    #[error("cyclic __proto__ value")]
    Cycle,
}

impl From<ChainError> for JsError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::Borrowed(_) => JsError::type_error(err.to_string()),
            ChainError::Cycle => JsError::range_error(err.to_string()),
        }
    }
}
