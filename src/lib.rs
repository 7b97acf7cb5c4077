//! # cadastro
//!
//! Brazilian registry document validation and formatting: CPF, CNPJ, phone
//! numbers, and pt-BR display strings for money, percentages, and dates.
//!
//! Every function is pure and total — any input string yields a boolean or
//! a best-effort formatted string, never a panic. The formatters are
//! progressive and idempotent, so they can be wired directly to a text
//! input's change handler. All monetary values use
//! [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use cadastro::{Cpf, format_cnpj, format_currency, validate_phone};
//! use rust_decimal_macros::dec;
//!
//! // Typed parsing with check-digit verification
//! let cpf: Cpf = "52998224725".parse().unwrap();
//! assert_eq!(cpf.to_string(), "529.982.247-25");
//!
//! // Progressive masking while the user types
//! assert_eq!(format_cnpj("112223"), "11.222.3");
//!
//! // Length-based phone validation
//! assert!(validate_phone("(11) 98765-4321"));
//!
//! // pt-BR money display
//! assert_eq!(format_currency(dec!(1234.5)), "R$ 1.234,50");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cpf`] | CPF check-digit validation, progressive mask, [`Cpf`] type |
//! | [`cnpj`] | CNPJ check-digit validation, progressive mask, [`Cnpj`] type |
//! | [`phone`] | Phone digit-count validation, mask, [`Phone`] type |
//! | [`display`] | Currency, percent, and date display strings |

pub mod cnpj;
pub mod cpf;
mod digits;
pub mod display;
mod error;
pub mod phone;

pub use cnpj::{Cnpj, format_cnpj, validate_cnpj};
pub use cpf::{Cpf, format_cpf, validate_cpf};
pub use display::{format_currency, format_date, format_percent, long_date_pt_br};
pub use error::{DocumentError, DocumentKind};
pub use phone::{Phone, PhoneKind, format_phone, validate_phone};
