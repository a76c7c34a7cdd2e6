//! Brazilian taxpayer document checks (CPF for people, CNPJ for companies).
//!
//! Both documents end in two mod-11 check digits. Inputs may carry the usual punctuation
//! (`.`, `-`, `/`); it is stripped before checking. Sequences of one repeated digit pass
//! the arithmetic but are not valid documents.

/// Removes the punctuation allowed in formatted documents.
///
/// Returns `None` when any other non-digit character is present.
pub fn normalize_document(value: &str) -> Option<String> {
    let mut digits = String::with_capacity(value.len());
    for c in value.trim().chars() {
        match c {
            '0'..='9' => digits.push(c),
            '.' | '-' | '/' | ' ' => {}
            _ => return None,
        }
    }
    Some(digits)
}

fn to_digits(value: &str, len: usize) -> Option<Vec<u32>> {
    let digits = normalize_document(value)?;
    if digits.len() != len {
        return None;
    }
    let digits: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.iter().all(|d| *d == digits[0]) {
        return None;
    }
    Some(digits)
}

fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        0 | 1 => 0,
        rest => 11 - rest,
    }
}

pub fn is_valid_cpf(value: &str) -> bool {
    let Some(digits) = to_digits(value, 11) else {
        return false;
    };

    let first = check_digit(&digits[..9], &[10, 9, 8, 7, 6, 5, 4, 3, 2]);
    let second = check_digit(&digits[..10], &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);

    digits[9] == first && digits[10] == second
}

pub fn is_valid_cnpj(value: &str) -> bool {
    let Some(digits) = to_digits(value, 14) else {
        return false;
    };

    let first = check_digit(&digits[..12], &[5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);
    let second = check_digit(&digits[..13], &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2]);

    digits[12] == first && digits[13] == second
}
