/// Lower-case and trim a name so it can be used as a key
pub fn normalize_name(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Optional leading `+`, then at least 7 digits, spaces or hyphens
pub fn validate_phone(phone: &str) -> bool {
    let body = phone.strip_prefix('+').unwrap_or(phone);
    body.chars().count() >= 7
        && body
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || c == '-')
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_address_char(c: char) -> bool {
    is_word_char(c) || c == '.' || c == '-'
}

/// Basic `local@domain.tld` check
///
/// The top-level part after the last dot must be word characters only.
pub fn validate_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !local.is_empty()
        && local.chars().all(is_address_char)
        && !host.is_empty()
        && host.chars().all(is_address_char)
        && !tld.is_empty()
        && tld.chars().all(is_word_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validation() {
        // Valid numbers
        assert!(validate_phone("5550100"));
        assert!(validate_phone("+44 20 7946 0958"));
        assert!(validate_phone("555-0100"));
        assert!(validate_phone("+1234567"));

        // Invalid numbers
        assert!(!validate_phone("555010")); // Too short
        assert!(!validate_phone("+123456")); // Plus does not count
        assert!(!validate_phone("555-CALL-NOW"));
        assert!(!validate_phone("++5550100"));
        assert!(!validate_phone("(555) 0100"));
        assert!(!validate_phone(""));
    }

    #[test]
    fn test_email_validation() {
        // Valid emails
        assert!(validate_email("user@example.com"));
        assert!(validate_email("first.last@mail.example.co.uk"));
        assert!(validate_email("under_score-dash@my-host.io"));

        // Invalid emails
        assert!(!validate_email("userexample.com")); // No @ symbol
        assert!(!validate_email("user@example")); // Missing TLD
        assert!(!validate_email("@example.com")); // Empty local part
        assert!(!validate_email("user@.com")); // Empty host
        assert!(!validate_email("user@example.")); // Empty TLD
        assert!(!validate_email("user@@example.com"));
        assert!(!validate_email("user name@example.com"));
        assert!(!validate_email("user+tag@example.com"));
        assert!(!validate_email("user@example.c-m"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_name_normalization() {
        assert_eq!(normalize_name("  Alice Smith "), "alice smith");
        assert_eq!(normalize_name("   "), "");
    }
}
