//! Promise object payload
//!
//! Promises here settle synchronously: there is no job queue, so reactions
//! registered on an already-settled promise run immediately.

use crate::value::JsValue;

/// Settlement state of a promise
#[derive(Debug, Clone)]
pub enum PromiseState {
    /// Not yet settled
    Pending,
    /// Resolved with a value
    Fulfilled(JsValue),
    /// Rejected with a reason
    Rejected(JsValue),
}

/// JavaScript Promise object
#[derive(Debug, Clone)]
pub struct PromiseObject {
    state: PromiseState,
}

impl PromiseObject {
    /// A promise that has not settled yet (`new Promise(noop)`)
    pub fn pending() -> Self {
        PromiseObject {
            state: PromiseState::Pending,
        }
    }

    /// `Promise.resolve(value)`
    pub fn fulfilled(value: JsValue) -> Self {
        PromiseObject {
            state: PromiseState::Fulfilled(value),
        }
    }

    /// `Promise.reject(reason)`
    pub fn rejected(reason: JsValue) -> Self {
        PromiseObject {
            state: PromiseState::Rejected(reason),
        }
    }

    /// Current state
    pub fn state(&self) -> &PromiseState {
        &self.state
    }
}
