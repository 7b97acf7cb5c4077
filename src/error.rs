use std::fmt;

use thiserror::Error;

/// Which registry document a value claimed to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas — individual taxpayer number, 11 digits.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica — company number, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// Number of digits in the canonical form.
    pub fn digit_count(self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Cpf => write!(f, "CPF"),
            DocumentKind::Cnpj => write!(f, "CNPJ"),
        }
    }
}

/// Why a registry number failed to parse.
///
/// The boolean validators (`validate_cpf` etc.) collapse these to `false`;
/// the typed parsers (`Cpf::from_str`, `Cnpj::from_str`, `Phone::from_str`)
/// surface them so callers can tell a typo from a truncated paste.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DocumentError {
    /// Wrong number of digits after stripping punctuation.
    #[error("{kind} must have {expected} digits, got {found}")]
    Length {
        /// Document the input claimed to be.
        kind: DocumentKind,
        /// Digits required by that document.
        expected: usize,
        /// Digits actually present.
        found: usize,
    },

    /// All digits identical (e.g. "000.000.000-00") — passes the mod-11
    /// arithmetic but is never an issued number.
    #[error("{0} with all digits identical is not an issued number")]
    RepeatedDigits(DocumentKind),

    /// One or both check digits do not match the weighted mod-11 sum.
    #[error("{0} check digits do not match")]
    CheckDigit(DocumentKind),

    /// Phone numbers carry 10 digits (landline) or 11 (mobile), area code
    /// included.
    #[error("phone number must have 10 or 11 digits, got {0}")]
    PhoneLength(usize),
}
