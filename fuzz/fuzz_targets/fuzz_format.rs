#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Formatters are total and idempotent on any input.
        let cpf = cadastro::format_cpf(s);
        assert_eq!(cadastro::format_cpf(&cpf), cpf);

        let cnpj = cadastro::format_cnpj(s);
        assert_eq!(cadastro::format_cnpj(&cnpj), cnpj);

        let phone = cadastro::format_phone(s);
        assert_eq!(cadastro::format_phone(&phone), phone);
    }
});
