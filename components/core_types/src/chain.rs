//! Prototype chain traversal
//!
//! [`JsValue::set_prototype`] refuses to close a loop, but object data can
//! still be swapped or cloned wholesale through the `RefCell`, so a walk
//! cannot assume the chain ends. [`PrototypeWalk`] runs a slow cursor at half
//! speed behind the fast one and reports a cycle when they meet, which keeps
//! chains of any finite length walkable.

use crate::error::ChainError;
use crate::value::JsValue;

/// Cursor over a value and its prototypes, nearest first.
///
/// # Examples
///
/// ```
/// use core_types::{JsValue, PrototypeWalk};
///
/// let base = JsValue::object_with_proto(None);
/// let derived = JsValue::object_with_proto(Some(base.clone()));
///
/// let mut walk = PrototypeWalk::new(&derived);
/// assert!(walk.try_next().unwrap().unwrap().same_object(&derived));
/// assert!(walk.try_next().unwrap().unwrap().same_object(&base));
/// assert!(walk.try_next().unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct PrototypeWalk {
    start: Option<JsValue>,
    last: Option<JsValue>,
    trailing: JsValue,
    visited: usize,
}

impl PrototypeWalk {
    /// Walk starting at `value` itself
    pub fn new(value: &JsValue) -> Self {
        PrototypeWalk {
            start: Some(value.clone()),
            last: None,
            trailing: value.clone(),
            visited: 0,
        }
    }

    /// The next object on the chain, or `None` past its end.
    ///
    /// Fails if an object on the chain is mutably borrowed or the chain
    /// loops back on itself. The walk is over after an error.
    pub fn try_next(&mut self) -> Result<Option<JsValue>, ChainError> {
        let current = match (self.start.take(), self.last.take()) {
            (Some(start), _) => start,
            (None, Some(last)) => match last.try_prototype()? {
                Some(proto) => proto,
                None => return Ok(None),
            },
            (None, None) => return Ok(None),
        };

        self.visited += 1;
        if self.visited > 1 {
            if self.visited % 2 == 1 {
                self.trailing = self.trailing.try_prototype()?.unwrap_or_default();
            }
            if current.same_object(&self.trailing) {
                return Err(ChainError::Cycle);
            }
        }

        self.last = Some(current.clone());
        Ok(Some(current))
    }
}
