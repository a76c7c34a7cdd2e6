//! Custom field rules plugged into `validator` derives.
//!
//! Each function returns a `ValidationError` carrying the Portuguese message shown to
//! API clients.

use std::borrow::Cow;

use validator::ValidationError;

use crate::server::{
    model::{bank_account::AccountType, status::RecordStatus, user::Role},
    util::document::{is_valid_cnpj, is_valid_cpf, normalize_document},
};

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "O campo não pode ficar em branco"));
    }
    Ok(())
}

pub fn valid_role(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<Role>()
        .map(|_| ())
        .map_err(|_| error("role", "Perfil deve ser 'admin' ou 'user'"))
}

pub fn valid_status(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<RecordStatus>()
        .map(|_| ())
        .map_err(|_| error("status", "Status deve ser 'active' ou 'inactive'"))
}

pub fn valid_account_type(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<AccountType>()
        .map(|_| ())
        .map_err(|_| error("account_type", "Tipo de conta deve ser 'checking' ou 'savings'"))
}

/// Agency numbers are digits only.
pub fn valid_agency(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(error("agency", "Agência deve conter apenas números"));
    }
    Ok(())
}

/// Account numbers are digits with an optional single check digit after `-`.
pub fn valid_account_number(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let (number, check) = match value.split_once('-') {
        Some((number, check)) => (number, Some(check)),
        None => (value, None),
    };

    let number_ok = !number.is_empty() && number.chars().all(|c| c.is_ascii_digit());
    let check_ok = match check {
        Some(check) => check.len() == 1 && check.chars().all(|c| c.is_ascii_alphanumeric()),
        None => true,
    };

    if !(number_ok && check_ok) {
        return Err(error(
            "account",
            "Conta deve conter apenas números e um dígito verificador opcional",
        ));
    }
    Ok(())
}

/// Accepts a valid CPF (11 digits) or CNPJ (14 digits).
pub fn valid_document(value: &str) -> Result<(), ValidationError> {
    let valid = match normalize_document(value) {
        Some(digits) if digits.len() == 11 => is_valid_cpf(&digits),
        Some(digits) if digits.len() == 14 => is_valid_cnpj(&digits),
        _ => false,
    };

    if !valid {
        return Err(error("document", "Documento deve ser um CPF ou CNPJ válido"));
    }
    Ok(())
}
