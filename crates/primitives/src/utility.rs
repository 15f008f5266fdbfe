use validator::ValidationError;

const LOCAL_DIGITS: usize = 8;
const COUNTRY_CODE: &str = "509";

/// Haitian numbers: eight local digits, optionally prefixed by `+509`/`509`.
/// Spaces, dashes and parentheses are ignored. Blank input is accepted here
/// so an unfinished form is merely incomplete rather than rejected.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    let digits: String = trimmed
        .trim_start_matches('+')
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect();

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(error("phone_invalid_character"));
    }

    let local = digits.strip_prefix(COUNTRY_CODE).filter(|rest| rest.len() == LOCAL_DIGITS);

    match local {
        Some(_) => Ok(()),
        None if digits.len() == LOCAL_DIGITS => Ok(()),
        None => Err(error("phone_invalid_length")),
    }
}

fn error(code: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.add_param("local_digits".into(), &LOCAL_DIGITS);
    err.add_param("country_code".into(), &COUNTRY_CODE);
    err
}
