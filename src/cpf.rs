//! CPF validation and formatting.
//!
//! The CPF (Cadastro de Pessoas Físicas) is the Brazilian individual
//! taxpayer number: 9 base digits plus 2 check digits, each a weighted
//! mod-11 sum over the digits before it (Receita Federal algorithm).

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::digits::{all_same, mod11_check_digit, strip_digits};
use crate::error::{DocumentError, DocumentKind};

/// Weights for the first check digit (applied to digits 0–8).
const FIRST_WEIGHTS: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit (applied to digits 0–9).
const SECOND_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

/// A structurally valid CPF.
///
/// Construction goes through [`FromStr`], which strips punctuation and
/// verifies both check digits — a value of this type always denotes an
/// 11-digit sequence that passes the Receita Federal algorithm. Serializes
/// as the canonical masked string (`"529.982.247-25"`) and re-validates on
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf([u8; 11]);

impl Cpf {
    /// The 11 digits without punctuation, e.g. `"52998224725"`.
    pub fn digits(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_digits(s);
        if digits.len() != 11 {
            return Err(DocumentError::Length {
                kind: DocumentKind::Cpf,
                expected: 11,
                found: digits.len(),
            });
        }
        if all_same(&digits) {
            return Err(DocumentError::RepeatedDigits(DocumentKind::Cpf));
        }
        if mod11_check_digit(&digits[..9], &FIRST_WEIGHTS) != digits[9]
            || mod11_check_digit(&digits[..10], &SECOND_WEIGHTS) != digits[10]
        {
            return Err(DocumentError::CheckDigit(DocumentKind::Cpf));
        }
        let mut raw = [0u8; 11];
        raw.copy_from_slice(&digits);
        Ok(Self(raw))
    }
}

impl fmt::Display for Cpf {
    /// Canonical masked form, `000.000.000-00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &d) in self.0.iter().enumerate() {
            match i {
                3 | 6 => f.write_char('.')?,
                9 => f.write_char('-')?,
                _ => {}
            }
            f.write_char(char::from(b'0' + d))?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> String {
        cpf.to_string()
    }
}

/// Check whether `input` contains a structurally valid CPF.
///
/// Punctuation is ignored; exactly 11 digits must remain, they must not all
/// be identical, and both check digits must match.
///
/// ```
/// assert!(cadastro::validate_cpf("529.982.247-25"));
/// assert!(!cadastro::validate_cpf("529.982.247-24"));
/// assert!(!cadastro::validate_cpf("111.111.111-11"));
/// ```
pub fn validate_cpf(input: &str) -> bool {
    input.parse::<Cpf>().is_ok()
}

/// Progressively mask a CPF as it is typed.
///
/// Strips non-digits, truncates to 11 digits, and inserts the `.`/`-`
/// separators of the `000.000.000-00` template as far as the digits reach.
/// Never emits trailing punctuation, never panics, and is idempotent, so it
/// can be applied to a controlled input's value on every keystroke.
///
/// ```
/// assert_eq!(cadastro::format_cpf("52998"), "529.98");
/// assert_eq!(cadastro::format_cpf("52998224725"), "529.982.247-25");
/// ```
pub fn format_cpf(input: &str) -> String {
    let mut digits = strip_digits(input);
    digits.truncate(11);
    let mut out = String::with_capacity(14);
    for (i, &d) in digits.iter().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(char::from(b'0' + d));
    }
    out
}
