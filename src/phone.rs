//! Brazilian phone number validation and formatting.
//!
//! Numbers are validated by digit count only: 10 digits for a landline,
//! 11 for a mobile (the ninth-digit format), area code included. Carrier
//! prefixes and area-code tables change too often to be worth encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::digits::strip_digits;
use crate::error::DocumentError;

/// Landline vs. mobile, decided by digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneKind {
    /// 10 digits: 2-digit area code + 8-digit subscriber number.
    Landline,
    /// 11 digits: 2-digit area code + 9-digit subscriber number.
    Mobile,
}

/// A phone number with a plausible Brazilian digit count.
///
/// Stores the bare digit string; [`fmt::Display`] renders the usual
/// `(00) 0000-0000` / `(00) 00000-0000` mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    /// Whether this is a landline or mobile number.
    pub fn kind(&self) -> PhoneKind {
        if self.0.len() > 10 {
            PhoneKind::Mobile
        } else {
            PhoneKind::Landline
        }
    }

    /// The 2-digit area code (DDD).
    pub fn area_code(&self) -> &str {
        &self.0[..2]
    }

    /// All digits without punctuation, e.g. `"11987654321"`.
    pub fn digits(&self) -> &str {
        &self.0
    }
}

impl FromStr for Phone {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_digits(s);
        if digits.len() != 10 && digits.len() != 11 {
            return Err(DocumentError::PhoneLength(digits.len()));
        }
        Ok(Self(digits.iter().map(|&d| char::from(b'0' + d)).collect()))
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_phone(&self.0))
    }
}

impl TryFrom<String> for Phone {
    type Error = DocumentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> String {
        phone.to_string()
    }
}

/// Check whether `input` has a plausible Brazilian phone digit count
/// (10 or 11 digits after stripping punctuation).
///
/// ```
/// assert!(cadastro::validate_phone("(11) 98765-4321"));
/// assert!(cadastro::validate_phone("1134567890"));
/// assert!(!cadastro::validate_phone("123"));
/// ```
pub fn validate_phone(input: &str) -> bool {
    matches!(strip_digits(input).len(), 10 | 11)
}

/// Progressively mask a phone number as it is typed.
///
/// The opening paren appears with the first digit, `") "` after the area
/// code, and the hyphen once 8 digits are present — before the last 4, so
/// the template switches from `(00) 0000-0000` to `(00) 00000-0000` when an
/// 11th digit arrives. Surplus digits past 11 are dropped. Idempotent.
///
/// ```
/// assert_eq!(cadastro::format_phone("11987654321"), "(11) 98765-4321");
/// assert_eq!(cadastro::format_phone("1134567890"), "(11) 3456-7890");
/// assert_eq!(cadastro::format_phone("113"), "(11) 3");
/// ```
pub fn format_phone(input: &str) -> String {
    let mut digits = strip_digits(input);
    digits.truncate(11);
    if digits.is_empty() {
        return String::new();
    }
    let hyphen_at = if digits.len() > 10 { 7 } else { 6 };
    let mut out = String::with_capacity(15);
    out.push('(');
    for (i, &d) in digits.iter().enumerate() {
        if i == 2 {
            out.push_str(") ");
        }
        if i == hyphen_at && digits.len() >= 8 {
            out.push('-');
        }
        out.push(char::from(b'0' + d));
    }
    out
}
