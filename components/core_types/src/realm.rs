//! Per-thread intrinsic objects
//!
//! Only the intrinsics that object creation and constructor lookup depend
//! on are modelled: the `Object` constructor and `Object.prototype`.

use crate::value::JsValue;

thread_local! {
    static REALM: Realm = Realm::new();
}

/// The intrinsics of the current thread
#[derive(Debug)]
pub struct Realm {
    object_constructor: JsValue,
    object_prototype: JsValue,
}

impl Realm {
    fn new() -> Self {
        // Built without JsValue::object(), which would re-enter REALM
        let object_prototype = JsValue::object_with_proto(None);
        let object_constructor = JsValue::function("Object", |_this, args| {
            Ok(match args.first() {
                Some(value) if !value.is_primitive() => value.clone(),
                _ => JsValue::object(),
            })
        });
        object_constructor.set("prototype", object_prototype.clone());
        object_prototype.set("constructor", object_constructor.clone());
        Realm {
            object_constructor,
            object_prototype,
        }
    }

    /// Run `f` with this thread's realm
    pub fn with<R>(f: impl FnOnce(&Realm) -> R) -> R {
        REALM.with(f)
    }

    /// The `Object` constructor
    pub fn object_constructor(&self) -> &JsValue {
        &self.object_constructor
    }

    /// `Object.prototype`
    pub fn object_prototype(&self) -> &JsValue {
        &self.object_prototype
    }

    /// Whether `value` is this thread's `Object` constructor
    pub fn is_object_constructor(value: &JsValue) -> bool {
        Self::with(|realm| realm.object_constructor.same_object(value))
    }
}
