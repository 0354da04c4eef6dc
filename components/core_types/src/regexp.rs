//! RegExp object payload

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::ValueError;

/// RegExp object
#[derive(Debug, Clone)]
pub struct RegExpObject {
    regex: Regex,
    source_pattern: String,
    /// Flags string in canonical order
    flags_str: String,
    global: bool,
    sticky: bool,
}

impl RegExpObject {
    /// Create a new RegExp from pattern and flags, as `new RegExp(pattern, flags)`
    pub fn new(pattern: &str, flags: &str) -> Result<Self, ValueError> {
        let flags_str = Self::canonical_flags(flags)?;
        let has = |flag: char| flags_str.contains(flag);

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(has('i'))
            .multi_line(has('m'))
            .dot_matches_new_line(has('s'))
            .unicode(true)
            .build()
            .map_err(|source| ValueError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(RegExpObject {
            regex,
            source_pattern: pattern.to_string(),
            global: has('g'),
            sticky: has('y'),
            flags_str,
        })
    }

    /// Validate flags and return them in the order `flags` getter reports them
    fn canonical_flags(flags: &str) -> Result<String, ValueError> {
        const ORDER: &str = "dgimsuy";
        let mut seen = [false; 7];
        for ch in flags.chars() {
            let slot = ORDER
                .find(ch)
                .ok_or_else(|| ValueError::InvalidFlags(flags.to_string()))?;
            if seen[slot] {
                return Err(ValueError::InvalidFlags(flags.to_string()));
            }
            seen[slot] = true;
        }
        Ok(ORDER
            .chars()
            .zip(seen)
            .filter_map(|(ch, on)| on.then_some(ch))
            .collect())
    }

    /// Get the flags string
    pub fn flags(&self) -> &str {
        &self.flags_str
    }

    /// Whether the `g` flag is set
    pub fn global(&self) -> bool {
        self.global
    }

    /// Whether the `y` flag is set
    pub fn sticky(&self) -> bool {
        self.sticky
    }

    /// `RegExp.prototype.test`
    pub fn test(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }
}

impl fmt::Display for RegExpObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source_pattern, self.flags_str)
    }
}
