//! # Password policy
//!
//! A password is accepted when it is at least [`MIN_LENGTH`] characters long,
//! contains an uppercase ASCII letter, and contains a special character. A
//! special character is anything that is not an ASCII letter or digit, so
//! `_`, spaces and non-ASCII symbols all count.
//!
//! Length is measured in UTF-16 code units, the way browser form values are,
//! so a character outside the Basic Multilingual Plane counts twice.

pub const MIN_LENGTH: usize = 6;

/// Inline message shown under the password field when the policy rejects it.
pub const PASSWORD_POLICY_MESSAGE: &str =
    "Password should be minimum 6 characters, contain at least 1 capital letter & 1 special character";

/// Check a candidate password against the policy.
pub fn validate_password(candidate: &str) -> bool {
    candidate.encode_utf16().count() >= MIN_LENGTH
        && candidate.chars().any(|c| c.is_ascii_uppercase())
        && candidate.chars().any(is_special)
}

fn is_special(c: char) -> bool {
    !c.is_ascii_alphanumeric()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples() {
        assert!(validate_password("Abc!23"));
        assert!(!validate_password("abc123"));
        assert!(!validate_password("Abcde"));
        assert!(!validate_password("Ab!cd"));
    }

    #[test]
    fn test_each_rule_is_required() {
        // no uppercase
        assert!(!validate_password("abc!23"));
        // no special
        assert!(!validate_password("Abc123"));
        // too short
        assert!(!validate_password("A!"));
        assert!(!validate_password(""));
    }

    #[test]
    fn test_underscore_and_space_count_as_special() {
        assert!(validate_password("Abc_23"));
        assert!(validate_password("Abc 23"));
    }

    #[test]
    fn test_non_ascii_uppercase_does_not_count() {
        assert!(!validate_password("Ébc!23"));
        assert!(validate_password("ÉAbc!2"));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        // 6 chars, more than 6 bytes
        assert!(validate_password("Aé!éé1"));
        // 5 chars, more than 6 bytes
        assert!(!validate_password("Aé!éé"));
        // 4 chars, 6 UTF-16 units
        assert!(validate_password("A!😀😀"));
        // 3 chars, 4 UTF-16 units
        assert!(!validate_password("A!😀"));
    }
}
