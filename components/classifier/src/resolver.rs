//! Constructor name lookup for the fallback tag
//!
//! Values that match no built-in kind are tagged after the function that
//! constructed them. Finding that function means reading the `constructor`
//! property through the prototype chain, which can run user getters. The
//! lookup lives behind [`TypeNameResolver`] so callers can replace it.

use std::cell::{BorrowError, Cell};

use core_types::{ChainError, JsError, JsValue, Property, PrototypeWalk, Realm};
use thiserror::Error;

/// How many `constructor` getters may be running at once on one thread.
///
/// A getter that classifies a value re-enters the resolver. Past this depth
/// the innermost lookup fails instead of recursing further.
pub const MAX_GETTER_NESTING: usize = 16;

thread_local! {
    static GETTER_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks one running `constructor` getter until dropped
struct GetterScope;

impl GetterScope {
    fn enter() -> Result<GetterScope, ResolveError> {
        GETTER_DEPTH.with(|depth| {
            let running = depth.get();
            if running >= MAX_GETTER_NESTING {
                return Err(ResolveError::GetterNestingTooDeep(running));
            }
            depth.set(running + 1);
            Ok(GetterScope)
        })
    }
}

impl Drop for GetterScope {
    fn drop(&mut self) {
        GETTER_DEPTH.with(|depth| depth.set(depth.get() - 1));
    }
}

/// What a resolver found out about a value's constructor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorName {
    /// Built by the generic `Object` constructor
    BaseObject,
    /// No constructor to name: null prototype, missing or non-function `constructor`
    Absent,
    /// The constructor exists but has an empty name
    Anonymous,
    /// Declared constructor name, case preserved
    Named(String),
}

/// Why a constructor lookup failed
#[derive(Debug, Error)]
pub enum ResolveError {
    /// A `constructor` getter threw
    #[error("constructor getter threw: {0}")]
    Thrown(#[from] JsError),
    /// An object on the chain is being mutated
    #[error("object is already mutably borrowed")]
    Borrowed(#[from] BorrowError),
    /// The prototype chain loops back on itself
    #[error("cyclic prototype chain")]
    PrototypeCycle,
    /// `constructor` getters kept classifying values from inside themselves
    #[error("constructor getters nested {0} deep")]
    GetterNestingTooDeep(usize),
}

impl From<ChainError> for ResolveError {
    fn from(err: ChainError) -> Self {
        match err {
            ChainError::Borrowed(borrow) => ResolveError::Borrowed(borrow),
            ChainError::Cycle => ResolveError::PrototypeCycle,
        }
    }
}

/// Looks up the name of the function that constructed a value.
///
/// Implemented for closures, which makes ad hoc resolvers easy to plug in:
///
/// ```
/// use classifier::{Classifier, ConstructorName, ResolveError, Tag};
/// use core_types::JsValue;
///
/// let blind = Classifier::with_resolver(|_: &JsValue| -> Result<ConstructorName, ResolveError> {
///     Ok(ConstructorName::Absent)
/// });
/// let ctor = JsValue::function("MyClass", |_this, _args| Ok(JsValue::undefined()));
/// let instance = ctor.construct(&[]).unwrap();
/// assert_eq!(blind.classify(&instance), Tag::Object);
/// ```
pub trait TypeNameResolver {
    /// Resolve the constructor of `value`
    fn resolve(&self, value: &JsValue) -> Result<ConstructorName, ResolveError>;
}

impl<F> TypeNameResolver for F
where
    F: Fn(&JsValue) -> Result<ConstructorName, ResolveError>,
{
    fn resolve(&self, value: &JsValue) -> Result<ConstructorName, ResolveError> {
        self(value)
    }
}

/// Reads `value.constructor` the way JavaScript property access does.
///
/// Chains of any length are followed; a cyclic chain is an error. Getters
/// run with the classified value as `this`, and at most
/// [`MAX_GETTER_NESTING`] of them may be active on a thread at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrototypeChainResolver;

impl PrototypeChainResolver {
    fn find_constructor(value: &JsValue) -> Result<Option<JsValue>, ResolveError> {
        let mut walk = PrototypeWalk::new(value);
        while let Some(holder) = walk.try_next()? {
            match holder.try_own_property("constructor")? {
                Some(Property::Data(constructor)) => return Ok(Some(constructor)),
                Some(Property::Accessor { get }) => {
                    let _scope = GetterScope::enter()?;
                    return Ok(Some(get.call(value, &[])?));
                }
                None => {}
            }
        }
        Ok(None)
    }

    fn name_of(constructor: &JsValue) -> ConstructorName {
        if Realm::is_object_constructor(constructor) {
            return ConstructorName::BaseObject;
        }
        match constructor.as_function() {
            Some(func) if func.name().is_empty() => ConstructorName::Anonymous,
            Some(func) => ConstructorName::Named(func.name().to_string()),
            None => ConstructorName::Absent,
        }
    }
}

impl TypeNameResolver for PrototypeChainResolver {
    fn resolve(&self, value: &JsValue) -> Result<ConstructorName, ResolveError> {
        // Primitives outside the fixed vocabulary are named after their wrapper
        let wrapper = match value {
            JsValue::Symbol(_) => Some("Symbol"),
            JsValue::BigInt(_) => Some("BigInt"),
            _ => None,
        };
        if let Some(name) = wrapper {
            return Ok(ConstructorName::Named(name.to_string()));
        }

        match Self::find_constructor(value)? {
            Some(constructor) => Ok(Self::name_of(&constructor)),
            None => Ok(ConstructorName::Absent),
        }
    }
}
