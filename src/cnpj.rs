//! CNPJ validation and formatting.
//!
//! The CNPJ (Cadastro Nacional da Pessoa Jurídica) identifies Brazilian
//! companies: 8 base digits, a 4-digit branch suffix, and 2 check digits.
//! The check digits use the same mod-11 rule as the CPF but with fixed
//! weight tables that restart at 9 after the branch boundary.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::digits::{all_same, mod11_check_digit, strip_digits};
use crate::error::{DocumentError, DocumentKind};

/// Weights for the first check digit (applied to digits 0–11).
const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit (applied to digits 0–12).
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// A structurally valid CNPJ.
///
/// Same guarantees as [`Cpf`](crate::Cpf): only [`FromStr`] constructs it,
/// both check digits verified, serialized as the masked string
/// (`"11.222.333/0001-81"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj([u8; 14]);

impl Cnpj {
    /// The 14 digits without punctuation, e.g. `"11222333000181"`.
    pub fn digits(&self) -> String {
        self.0.iter().map(|&d| char::from(b'0' + d)).collect()
    }

    /// The 4-digit branch (filial) suffix, `"0001"` for a head office.
    pub fn branch(&self) -> String {
        self.0[8..12].iter().map(|&d| char::from(b'0' + d)).collect()
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = strip_digits(s);
        if digits.len() != 14 {
            return Err(DocumentError::Length {
                kind: DocumentKind::Cnpj,
                expected: 14,
                found: digits.len(),
            });
        }
        if all_same(&digits) {
            return Err(DocumentError::RepeatedDigits(DocumentKind::Cnpj));
        }
        if mod11_check_digit(&digits[..12], &FIRST_WEIGHTS) != digits[12]
            || mod11_check_digit(&digits[..13], &SECOND_WEIGHTS) != digits[13]
        {
            return Err(DocumentError::CheckDigit(DocumentKind::Cnpj));
        }
        let mut raw = [0u8; 14];
        raw.copy_from_slice(&digits);
        Ok(Self(raw))
    }
}

impl fmt::Display for Cnpj {
    /// Canonical masked form, `00.000.000/0000-00`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &d) in self.0.iter().enumerate() {
            match i {
                2 | 5 => f.write_char('.')?,
                8 => f.write_char('/')?,
                12 => f.write_char('-')?,
                _ => {}
            }
            f.write_char(char::from(b'0' + d))?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> String {
        cnpj.to_string()
    }
}

/// Check whether `input` contains a structurally valid CNPJ.
///
/// ```
/// assert!(cadastro::validate_cnpj("11.222.333/0001-81"));
/// assert!(!cadastro::validate_cnpj("11.222.333/0001-80"));
/// ```
pub fn validate_cnpj(input: &str) -> bool {
    input.parse::<Cnpj>().is_ok()
}

/// Progressively mask a CNPJ as it is typed.
///
/// Template `00.000.000/0000-00`, separators appearing at 2, 5, 8, and 12
/// digits; surplus digits past 14 are dropped. Idempotent and total.
///
/// ```
/// assert_eq!(cadastro::format_cnpj("112223"), "11.222.3");
/// assert_eq!(cadastro::format_cnpj("11222333000181"), "11.222.333/0001-81");
/// ```
pub fn format_cnpj(input: &str) -> String {
    let mut digits = strip_digits(input);
    digits.truncate(14);
    let mut out = String::with_capacity(18);
    for (i, &d) in digits.iter().enumerate() {
        match i {
            2 | 5 => out.push('.'),
            8 => out.push('/'),
            12 => out.push('-'),
            _ => {}
        }
        out.push(char::from(b'0' + d));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_cnpj_masked_and_bare() {
        assert!(validate_cnpj("11.222.333/0001-81"));
        assert!(validate_cnpj("11222333000181"));
        // Banco do Brasil head office
        assert!(validate_cnpj("00.000.000/0001-91"));
    }

    #[test]
    fn first_check_digit_mismatch() {
        // digit 12 should be 8
        assert!(!validate_cnpj("11.222.333/0001-71"));
    }

    #[test]
    fn second_check_digit_mismatch() {
        assert!(!validate_cnpj("11.222.333/0001-80"));
    }

    #[test]
    fn repeated_digits_rejected() {
        assert!(!validate_cnpj("00000000000000"));
        assert!(!validate_cnpj("99.999.999/9999-99"));
    }

    #[test]
    fn wrong_length_rejected() {
        assert!(!validate_cnpj(""));
        assert!(!validate_cnpj("1122233300018"));
        assert!(!validate_cnpj("112223330001811"));
        // A valid CPF is not a CNPJ
        assert!(!validate_cnpj("529.982.247-25"));
    }

    #[test]
    fn parse_error_kinds() {
        assert_eq!(
            "11222333".parse::<Cnpj>(),
            Err(DocumentError::Length {
                kind: DocumentKind::Cnpj,
                expected: 14,
                found: 8,
            })
        );
        assert_eq!(
            "11111111111111".parse::<Cnpj>(),
            Err(DocumentError::RepeatedDigits(DocumentKind::Cnpj))
        );
        assert_eq!(
            "11222333000180".parse::<Cnpj>(),
            Err(DocumentError::CheckDigit(DocumentKind::Cnpj))
        );
    }

    #[test]
    fn display_and_accessors() {
        let cnpj: Cnpj = "11222333000181".parse().unwrap();
        assert_eq!(cnpj.to_string(), "11.222.333/0001-81");
        assert_eq!(cnpj.digits(), "11222333000181");
        assert_eq!(cnpj.branch(), "0001");
    }

    #[test]
    fn progressive_mask_steps() {
        assert_eq!(format_cnpj(""), "");
        assert_eq!(format_cnpj("11"), "11");
        assert_eq!(format_cnpj("112"), "11.2");
        assert_eq!(format_cnpj("11222"), "11.222");
        assert_eq!(format_cnpj("112223"), "11.222.3");
        assert_eq!(format_cnpj("11222333"), "11.222.333");
        assert_eq!(format_cnpj("112223330"), "11.222.333/0");
        assert_eq!(format_cnpj("112223330001"), "11.222.333/0001");
        assert_eq!(format_cnpj("1122233300018"), "11.222.333/0001-8");
        assert_eq!(format_cnpj("11222333000181"), "11.222.333/0001-81");
    }

    #[test]
    fn surplus_digits_truncated() {
        assert_eq!(format_cnpj("11222333000181999"), "11.222.333/0001-81");
    }

    #[test]
    fn formatting_ignores_existing_punctuation() {
        assert_eq!(format_cnpj("11.222.333/0001-81"), "11.222.333/0001-81");
        assert_eq!(format_cnpj("11/222"), "11.222");
    }

    #[test]
    fn serde_round_trip() {
        let cnpj: Cnpj = "11222333000181".parse().unwrap();
        let json = serde_json::to_string(&cnpj).unwrap();
        assert_eq!(json, "\"11.222.333/0001-81\"");
        let back: Cnpj = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cnpj);
    }
}
