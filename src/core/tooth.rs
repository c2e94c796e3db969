//! Tooth tags and tooth code strings
//!
//! Every recorded tooth carries one of three tags. Users enter a layer as a
//! string of single-letter codes (`I`, `B`, `M`, any case), one per tooth.

use std::fmt;
use thiserror::Error;

/// Most teeth a single layer may hold
pub const MAX_TEETH: usize = 8;

/// Classification of a single tooth slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToothTag {
    /// Incisor (I)
    Incisor,
    /// Bicuspid (B)
    Bicuspid,
    /// Missing or extracted (M)
    Missing,
}

impl ToothTag {
    /// Get the single-letter code used for input and display
    pub fn code(&self) -> char {
        match self {
            ToothTag::Incisor => 'I',
            ToothTag::Bicuspid => 'B',
            ToothTag::Missing => 'M',
        }
    }

    /// Parse a single code character, case-insensitively
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(ToothTag::Incisor),
            'B' => Some(ToothTag::Bicuspid),
            'M' => Some(ToothTag::Missing),
            _ => None,
        }
    }

    /// Whether the tooth can still be extracted
    pub fn is_present(&self) -> bool {
        !matches!(self, ToothTag::Missing)
    }
}

impl fmt::Display for ToothTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error parsing a tooth code or code string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToothCodeError {
    #[error("tooth code string is empty")]
    Empty,

    #[error("invalid tooth code '{0}' (expected I, B or M)")]
    InvalidCode(char),

    #[error("{count} teeth given, at most 8 fit in a layer")]
    TooMany { count: usize },
}

/// True if `s` is non-empty and made only of `I`, `B` and `M` in any case.
///
/// Length is not checked here; see [`parse_code_string`].
pub fn is_valid_code_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| ToothTag::from_code(c).is_some())
}

/// Parse a layer's code string into normalised tags, in input order.
///
/// Character validity is checked before length, so an over-long string with
/// a bad character reports the bad character.
pub fn parse_code_string(s: &str) -> Result<Vec<ToothTag>, ToothCodeError> {
    if s.is_empty() {
        return Err(ToothCodeError::Empty);
    }

    let tags = s
        .chars()
        .map(|c| ToothTag::from_code(c).ok_or(ToothCodeError::InvalidCode(c)))
        .collect::<Result<Vec<_>, _>>()?;

    if tags.len() > MAX_TEETH {
        return Err(ToothCodeError::TooMany { count: tags.len() });
    }

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_case_insensitive() {
        assert_eq!(ToothTag::from_code('i'), Some(ToothTag::Incisor));
        assert_eq!(ToothTag::from_code('B'), Some(ToothTag::Bicuspid));
        assert_eq!(ToothTag::from_code('m'), Some(ToothTag::Missing));
        assert_eq!(ToothTag::from_code('x'), None);
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(ToothTag::Incisor.to_string(), "I");
        assert_eq!(ToothTag::Bicuspid.to_string(), "B");
        assert_eq!(ToothTag::Missing.to_string(), "M");
    }

    #[test]
    fn test_valid_code_strings_of_every_length() {
        let alphabet = ['I', 'B', 'M', 'i', 'b', 'm'];
        for len in 1..=MAX_TEETH {
            for start in 0..alphabet.len() {
                let s: String = (0..len)
                    .map(|k| alphabet[(start + k) % alphabet.len()])
                    .collect();
                assert!(is_valid_code_string(&s), "{s} should be valid");
            }
        }
    }

    #[test]
    fn test_invalid_code_strings() {
        assert!(!is_valid_code_string(""));
        assert!(!is_valid_code_string("IBX"));
        assert!(!is_valid_code_string("I B"));
        assert!(!is_valid_code_string("1"));
    }

    #[test]
    fn test_validity_ignores_length() {
        assert!(is_valid_code_string("IIIIIIIIII"));
    }

    #[test]
    fn test_parse_code_string_normalises() {
        let tags = parse_code_string("iBm").unwrap();
        assert_eq!(
            tags,
            vec![ToothTag::Incisor, ToothTag::Bicuspid, ToothTag::Missing]
        );
    }

    #[test]
    fn test_parse_code_string_errors() {
        assert_eq!(parse_code_string(""), Err(ToothCodeError::Empty));
        assert_eq!(
            parse_code_string("IIIIIIIII"),
            Err(ToothCodeError::TooMany { count: 9 })
        );
        // Bad character wins over length
        assert_eq!(
            parse_code_string("IIIIIIIIIZ"),
            Err(ToothCodeError::InvalidCode('Z'))
        );
    }

    #[test]
    fn test_is_present() {
        assert!(ToothTag::Incisor.is_present());
        assert!(ToothTag::Bicuspid.is_present());
        assert!(!ToothTag::Missing.is_present());
    }
}
