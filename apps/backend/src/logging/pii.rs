use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Vetted regex literals used for redaction.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Email pattern: matches standard email addresses
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Service Bus credential pairs: `SharedAccessKey=...` inside connection
    /// strings and `sig=...` inside SAS tokens.
    pub fn sas_secret() -> &'static Regex {
        static SAS_SECRET_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"(?i)\b(SharedAccessKey|sig)=[^;&\s]+").unwrap()
        });
        &SAS_SECRET_REGEX
    }
}

/// Masks golfer emails (first character of the local part is kept) and
/// Service Bus secrets before a string reaches the logs.
pub fn redact(input: &str) -> String {
    let email_redacted = PiiRegexRegistry::email().replace_all(input, |caps: &regex::Captures| {
        let full_match = &caps[0];
        match full_match.find('@') {
            Some(0) | None => full_match.to_string(),
            Some(at_pos) => {
                let first_char = &full_match[..1];
                format!("{first_char}***{}", &full_match[at_pos..])
            }
        }
    });

    PiiRegexRegistry::sas_secret()
        .replace_all(&email_redacted, "$1=[REDACTED]")
        .to_string()
}

/// A wrapper that redacts its contents whenever it is formatted.
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
