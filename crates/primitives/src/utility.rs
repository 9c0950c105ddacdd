use validator::ValidationError;

const MIN_LEN: usize = 10;
const MAX_LEN: usize = 128;
const SPECIAL_CHARS: &str = "!@#$%^&*";

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    let len = password.len();

    if len < MIN_LEN {
        return Err(error("password_too_short"));
    }

    if len > MAX_LEN {
        return Err(error("password_too_long"));
    }

    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_digit = false;

    for c in password.chars() {
        match c {
            c if c.is_ascii_lowercase() => has_lower = true,
            c if c.is_ascii_uppercase() => has_upper = true,
            c if c.is_ascii_digit() => has_digit = true,
            c if SPECIAL_CHARS.contains(c) => {}
            _ => return Err(error("password_invalid_character")),
        }
    }

    if !(has_lower && has_upper && has_digit) {
        return Err(error("password_policy_violation"));
    }

    Ok(())
}

fn error(code: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.add_param("min_length".into(), &MIN_LEN);
    err.add_param("max_length".into(), &MAX_LEN);
    err
}

/// Lowercase, hyphen-joined slug with a short random suffix so titles need
/// not be unique.
pub fn slugify(title: &str, suffix: &str) -> String {
    let base: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();

    let collapsed = base
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    format!("{}-{}", collapsed, suffix)
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(
            slugify("Seaside  Villa, No. 7", "a1b2c"),
            "seaside-villa-no-7-a1b2c"
        );
    }
}
