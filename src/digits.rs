//! Shared digit handling for registry numbers.
//!
//! Every validator and formatter in this crate works on the same canonical
//! intermediate form: the input with everything except ASCII digits removed.

/// Strip all non-digit characters, returning digit values 0–9.
pub(crate) fn strip_digits(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// True if every digit in the sequence is the same.
///
/// Sequences like `000.000.000-00` pass the mod-11 arithmetic but are not
/// issued registry numbers, so both validators reject them up front.
pub(crate) fn all_same(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// Mod-11 check digit over a weighted digit sum.
///
/// `digits` and `weights` are zipped pairwise; the check digit is `0` when
/// `sum % 11 < 2`, otherwise `11 - sum % 11`. Both CPF and CNPJ use this
/// rule, differing only in their weight tables.
pub(crate) fn mod11_check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    debug_assert_eq!(digits.len(), weights.len());
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        (11 - remainder) as u8
    }
}
