use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Email pattern: matches standard email addresses.
fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
    });
    &EMAIL_REGEX
}

/// Opaque token pattern: base64-like runs of 16+ chars. JWTs and password
/// hashes both match, so neither survives into a log line.
fn token_regex() -> &'static Regex {
    static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"\b[A-Za-z0-9+/$.=_-]{16,}\b").unwrap()
    });
    &TOKEN_REGEX
}

/// Redacts sensitive information from a string.
///
/// - Emails: keeps the first character of the local part and the full domain.
/// - Opaque tokens (base64-like runs of 16+ chars): replaced wholesale.
///
/// Order matters: emails first, then tokens, to avoid double-processing.
pub fn redact(input: &str) -> String {
    let email_redacted = email_regex().replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.find('@') {
            Some(at_pos) if at_pos > 0 => {
                let first_char = &full_match[..1];
                let domain = &full_match[at_pos..];
                format!("{first_char}***{domain}")
            }
            _ => full_match.to_string(),
        }
    });

    token_regex()
        .replace_all(&email_redacted, "[REDACTED_TOKEN]")
        .to_string()
}

/// A wrapper that automatically redacts sensitive strings when displayed.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_redaction() {
        assert_eq!(redact("user@example.com"), "u***@example.com");
        assert_eq!(redact("a@test.org"), "a***@test.org");
        assert_eq!(
            redact("Contact user@example.com or admin@test.org"),
            "Contact u***@example.com or a***@test.org"
        );
    }

    #[test]
    fn token_redaction() {
        assert_eq!(
            redact("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"),
            "[REDACTED_TOKEN]"
        );
        // Short strings are left untouched
        assert_eq!(redact("short123"), "short123");
    }

    #[test]
    fn redacted_wrapper() {
        let redacted = Redacted("user@example.com");
        assert_eq!(format!("{redacted}"), "u***@example.com");
        assert_eq!(format!("{redacted:?}"), "u***@example.com");
    }

    #[test]
    fn no_sensitive_data_is_unchanged() {
        assert_eq!(redact("Hello world"), "Hello world");
        assert_eq!(redact(""), "");
    }
}
