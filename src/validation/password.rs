use std::fmt;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MAX_PASSWORD_LEN: usize = 16;

/// Password strength rules, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    TooShort,
    TooLong,
    MissingDigit,
    MissingLowercase,
    MissingUppercase,
}

impl fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            PasswordRule::TooShort => "too short",
            PasswordRule::TooLong => "too long",
            PasswordRule::MissingDigit => "must contain a digit",
            PasswordRule::MissingLowercase => "must contain a lowercase letter",
            PasswordRule::MissingUppercase => "must contain an uppercase letter",
        };
        f.write_str(reason)
    }
}

/// Check a candidate password against the strength policy.
///
/// Returns the first violated rule, or `None` if the password is
/// acceptable. Only one rule is reported per call. Length is counted in
/// UTF-16 code units, so a character outside the Basic Multilingual Plane
/// counts twice.
pub fn validate_password(candidate: &str) -> Option<PasswordRule> {
    let len = candidate.encode_utf16().count();

    if len < MIN_PASSWORD_LEN {
        return Some(PasswordRule::TooShort);
    }

    if len > MAX_PASSWORD_LEN {
        return Some(PasswordRule::TooLong);
    }

    if !candidate.chars().any(|c| c.is_ascii_digit()) {
        return Some(PasswordRule::MissingDigit);
    }

    if !candidate.chars().any(|c| c.is_ascii_lowercase()) {
        return Some(PasswordRule::MissingLowercase);
    }

    if !candidate.chars().any(|c| c.is_ascii_uppercase()) {
        return Some(PasswordRule::MissingUppercase);
    }

    None
}
