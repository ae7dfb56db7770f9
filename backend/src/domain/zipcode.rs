//! Brazilian postal code (CEP) value type.
//!
//! A [`ZipCode`] is always held in its canonical hyphenated form
//! (`nnnnn-nnn`). Construction accepts exactly two raw shapes: eight
//! consecutive ASCII digits, or five digits, a hyphen and three digits.
//! Everything else is rejected; there is no trimming or partial repair.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const PREFIX_LEN: usize = 5;
const SUFFIX_LEN: usize = 3;
const DIGIT_COUNT: usize = PREFIX_LEN + SUFFIX_LEN;

/// Validation error returned by [`ZipCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid zip code")]
pub struct ZipCodeValidationError;

/// Canonical `nnnnn-nnn` postal code.
///
/// # Examples
/// ```
/// use backend::domain::ZipCode;
///
/// let zip = ZipCode::parse("29902555").expect("eight digits are accepted");
/// assert_eq!(zip.as_str(), "29902-555");
///
/// let same = ZipCode::parse("29902-555").expect("canonical form is accepted");
/// assert_eq!(zip, same);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Validate and canonicalize a raw postal code.
    ///
    /// # Errors
    /// Returns [`ZipCodeValidationError`] unless `raw` is eight digits or
    /// `ddddd-ddd`.
    pub fn parse(raw: &str) -> Result<Self, ZipCodeValidationError> {
        let bytes = raw.as_bytes();
        match bytes.len() {
            DIGIT_COUNT if all_digits(bytes) => {
                let (prefix, suffix) = raw.split_at(PREFIX_LEN);
                Ok(Self(format!("{prefix}-{suffix}")))
            }
            len if len == DIGIT_COUNT + 1 => {
                let (prefix, rest) = bytes.split_at(PREFIX_LEN);
                match rest.split_first() {
                    Some((b'-', suffix)) if all_digits(prefix) && all_digits(suffix) => {
                        Ok(Self(raw.to_owned()))
                    }
                    _ => Err(ZipCodeValidationError),
                }
            }
            _ => Err(ZipCodeValidationError),
        }
    }

    /// Borrow the canonical representation.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

fn all_digits(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_digit)
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for ZipCode {
    type Err = ZipCodeValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
