//! One boolean shortcut per fixed tag
//!
//! The predicate functions and the registry table come out of the same macro
//! invocation, so a tag cannot gain a predicate without also gaining a
//! registry entry.

use std::fmt;

use core_types::JsValue;

use crate::classify::classify_arg;
use crate::tag::Tag;

/// A shortcut predicate: whether the (optional) argument has a given tag
pub type Predicate = fn(Option<&JsValue>) -> bool;

/// Association between a fixed tag and its predicate
#[derive(Clone)]
pub struct PredicateEntry {
    tag: Tag,
    predicate: Predicate,
}

impl PredicateEntry {
    /// The tag this entry tests for
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    /// Rendered tag name, which is also the predicate's lookup key
    pub fn name(&self) -> &str {
        self.tag.as_str()
    }

    /// The predicate
    pub fn predicate(&self) -> Predicate {
        self.predicate
    }

    /// Run the predicate
    pub fn test(&self, value: Option<&JsValue>) -> bool {
        (self.predicate)(value)
    }
}

impl fmt::Debug for PredicateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateEntry")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

macro_rules! fixed_predicates {
    ($($name:ident => $tag:ident, $rendered:literal;)*) => {
        $(
            #[doc = concat!("Whether the argument classifies as `", $rendered, "`. A missing argument counts as `undefined`.")]
            pub fn $name(value: Option<&JsValue>) -> bool {
                classify_arg(value) == Tag::$tag
            }
        )*

        static ENTRIES: &[PredicateEntry] = &[
            $(PredicateEntry { tag: Tag::$tag, predicate: $name },)*
        ];
    };
}

fixed_predicates! {
    is_boolean => Boolean, "boolean";
    is_null => Null, "null";
    is_undefined => Undefined, "undefined";
    is_number => Number, "number";
    is_string => String, "string";
    is_nan => NaN, "NaN";
    is_infinity => Infinity, "Infinity";
    is_arguments => Arguments, "arguments";
    is_array => Array, "array";
    is_date => Date, "date";
    is_error => Error, "error";
    is_function => Function, "function";
    is_object => Object, "object";
    is_promise => Promise, "promise";
    is_regexp => RegExp, "regexp";
}

static BUILTIN: PredicateRegistry = PredicateRegistry { entries: ENTRIES };

/// Lookup table from tag name to predicate.
///
/// Holds exactly one entry per fixed tag, in [`Tag::fixed`] order. Tags
/// derived from constructor names have no predicate.
///
/// # Examples
///
/// ```
/// use classifier::PredicateRegistry;
/// use core_types::JsValue;
///
/// let registry = PredicateRegistry::builtin();
/// let is_nan = registry.get("NaN").unwrap();
/// assert!(is_nan(Some(&JsValue::boxed_number(f64::NAN))));
/// assert!(registry.get("myclass").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PredicateRegistry {
    entries: &'static [PredicateEntry],
}

impl PredicateRegistry {
    /// The registry of fixed-tag predicates
    pub fn builtin() -> &'static PredicateRegistry {
        &BUILTIN
    }

    /// Predicate registered under `name`
    pub fn get(&self, name: &str) -> Option<Predicate> {
        self.entry(name).map(PredicateEntry::predicate)
    }

    /// Predicate for `tag`
    pub fn get_tag(&self, tag: &Tag) -> Option<Predicate> {
        self.get(tag.as_str())
    }

    /// Entry registered under `name`
    pub fn entry(&self, name: &str) -> Option<&'static PredicateEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    /// Whether a predicate exists for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.entry(name).is_some()
    }

    /// Run the predicate registered under `name`
    pub fn test(&self, name: &str, value: Option<&JsValue>) -> Option<bool> {
        self.entry(name).map(|entry| entry.test(value))
    }

    /// All entries, in registration order
    pub fn iter(&self) -> std::slice::Iter<'static, PredicateEntry> {
        self.entries.iter()
    }

    /// Registered names
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(PredicateEntry::name)
    }

    /// Registered tags
    pub fn tags(&self) -> impl Iterator<Item = &'static Tag> {
        self.entries.iter().map(PredicateEntry::tag)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for &PredicateRegistry {
    type Item = &'static PredicateEntry;
    type IntoIter = std::slice::Iter<'static, PredicateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
