//! Languages whose audio streams survive filtering

use std::fmt;

use serde::Serialize;

use crate::language::LanguageCode;

/// The native language plus the English fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeepSet {
    native: LanguageCode,
    codes: Vec<LanguageCode>,
}

impl KeepSet {
    /// `{native, eng}`, or just `{eng}` when the native language is English.
    pub fn for_native(native: LanguageCode) -> Self {
        let mut codes = vec![native.clone()];
        if !native.is_english() {
            codes.push(LanguageCode::english());
        }
        Self { native, codes }
    }

    pub fn native(&self) -> &LanguageCode {
        &self.native
    }

    pub fn codes(&self) -> &[LanguageCode] {
        &self.codes
    }

    /// Is a raw stream language tag in the set?
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.codes.iter().any(|code| code.matches_tag(tag))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl fmt::Display for KeepSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let codes: Vec<&str> = self.codes.iter().map(LanguageCode::as_str).collect();
        write!(f, "{}", codes.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_set_native_and_english() {
        let keep = KeepSet::for_native(LanguageCode::new("jpn"));
        assert_eq!(keep.len(), 2);
        assert!(keep.contains_tag("jpn"));
        assert!(keep.contains_tag("eng"));
        assert!(!keep.contains_tag("fre"));
        assert_eq!(keep.to_string(), "jpn,eng");
    }

    #[test]
    fn test_keep_set_english_native_has_no_duplicate() {
        let keep = KeepSet::for_native(LanguageCode::new("eng"));
        assert_eq!(keep.codes(), &[LanguageCode::english()]);
        assert_eq!(keep.len(), 1);
    }

    #[test]
    fn test_keep_set_matches_bibliographic_tags() {
        let keep = KeepSet::for_native(LanguageCode::new("deu"));
        assert!(keep.contains_tag("ger"));
        assert!(keep.contains_tag("DEU"));
    }
}
