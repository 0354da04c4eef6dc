//! Classification results

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// The kind tag of a value.
///
/// The fixed variants render exactly as `boolean`, `null`, `undefined`,
/// `number`, `string`, `NaN`, `Infinity`, `arguments`, `array`, `date`,
/// `error`, `function`, `object`, `promise` and `regexp`. [`Tag::Other`]
/// carries a lower-cased constructor name for everything else.
///
/// Tags compare by their rendered name, so `Tag::from_name("array")` and
/// `Tag::Array` are the same tag.
///
/// # Examples
///
/// ```
/// use classifier::Tag;
///
/// assert_eq!(Tag::NaN.as_str(), "NaN");
/// assert_eq!(Tag::from_constructor_name("MyClass").as_str(), "myclass");
/// assert_eq!(Tag::from_name("regexp"), Tag::RegExp);
/// ```
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Tag {
    /// `boolean`
    Boolean,
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// `number`
    Number,
    /// `string`
    String,
    /// `NaN`
    NaN,
    /// `Infinity`
    Infinity,
    /// `arguments`
    Arguments,
    /// `array`
    Array,
    /// `date`
    Date,
    /// `error`
    Error,
    /// `function`
    Function,
    /// `object`
    Object,
    /// `promise`
    Promise,
    /// `regexp`
    RegExp,
    /// Lower-cased name of the value's constructor
    Other(std::string::String),
}

static FIXED_TAGS: [Tag; 15] = [
    Tag::Boolean,
    Tag::Null,
    Tag::Undefined,
    Tag::Number,
    Tag::String,
    Tag::NaN,
    Tag::Infinity,
    Tag::Arguments,
    Tag::Array,
    Tag::Date,
    Tag::Error,
    Tag::Function,
    Tag::Object,
    Tag::Promise,
    Tag::RegExp,
];

impl Tag {
    /// The fixed vocabulary, in its canonical order
    pub fn fixed() -> &'static [Tag] {
        &FIXED_TAGS
    }

    /// Rendered name of the tag
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Boolean => "boolean",
            Tag::Null => "null",
            Tag::Undefined => "undefined",
            Tag::Number => "number",
            Tag::String => "string",
            Tag::NaN => "NaN",
            Tag::Infinity => "Infinity",
            Tag::Arguments => "arguments",
            Tag::Array => "array",
            Tag::Date => "date",
            Tag::Error => "error",
            Tag::Function => "function",
            Tag::Object => "object",
            Tag::Promise => "promise",
            Tag::RegExp => "regexp",
            Tag::Other(name) => name,
        }
    }

    /// Parse a rendered name. Names outside the fixed vocabulary become
    /// [`Tag::Other`] as given.
    pub fn from_name(name: &str) -> Tag {
        FIXED_TAGS
            .iter()
            .find(|tag| tag.as_str() == name)
            .cloned()
            .unwrap_or_else(|| Tag::Other(name.to_string()))
    }

    /// Tag for an instance of a constructor with this declared name
    pub fn from_constructor_name(name: &str) -> Tag {
        Tag::from_name(&name.to_lowercase())
    }

    /// Whether the tag belongs to the fixed vocabulary
    pub fn is_fixed(&self) -> bool {
        FIXED_TAGS.iter().any(|tag| tag.as_str() == self.as_str())
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl PartialEq<str> for Tag {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Tag> for std::string::String {
    fn from(tag: Tag) -> Self {
        match tag {
            Tag::Other(name) => name,
            fixed => fixed.as_str().to_string(),
        }
    }
}

impl From<std::string::String> for Tag {
    fn from(name: std::string::String) -> Self {
        Tag::from_name(&name)
    }
}
