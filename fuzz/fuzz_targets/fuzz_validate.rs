#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — false is fine, panics are bugs.
        let _ = cadastro::validate_cpf(s);
        let _ = cadastro::validate_cnpj(s);
        let _ = cadastro::validate_phone(s);
        let _ = s.parse::<cadastro::Cpf>();
        let _ = s.parse::<cadastro::Cnpj>();
        let _ = s.parse::<cadastro::Phone>();
    }
});
