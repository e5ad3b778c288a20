//! Advisory PII scanning for message text.
//!
//! Messages between talent and venues are scanned at write time for contact
//! details that would let the parties route around the platform. A match
//! only annotates the stored message -- nothing is blocked or redacted.

use std::sync::LazyLock;

use regex::Regex;

/// Reason identifier for phone-number-shaped digit sequences.
pub const REASON_PHONE: &str = "phone";
/// Reason identifier for email-address-shaped strings.
pub const REASON_EMAIL: &str = "email";
/// Reason identifier for social handles and bare domain names.
pub const REASON_SOCIAL: &str = "social";

/// Seven or more digits, allowing common separators and an optional `+`.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d(?:[\s().-]?\d){6,}").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// `@handle` fragments, or bare domain names on well-known TLDs. Deliberately
/// naive: this is an advisory net, not a parser.
static SOCIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@[A-Za-z0-9_.]{2,}|\b[A-Za-z0-9-]+\.(?:com|net|org|io|co|app|me|tv|club)\b")
        .unwrap()
});

/// Scan message text against the ordered pattern set.
///
/// Returns the identifiers of every matching pattern, in pattern order.
/// An empty result means the text looks clean.
pub fn scan(text: &str) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    if PHONE_RE.is_match(text) {
        reasons.push(REASON_PHONE);
    }
    if EMAIL_RE.is_match(text) {
        reasons.push(REASON_EMAIL);
    }
    if SOCIAL_RE.is_match(text) {
        reasons.push(REASON_SOCIAL);
    }
    reasons
}

/// Join scan results into the stored `pii_reason` value.
///
/// `None` when the scan found nothing, so clean messages store a NULL reason.
pub fn reason_string(reasons: &[&str]) -> Option<String> {
    if reasons.is_empty() {
        None
    } else {
        Some(reasons.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_matches_nothing() {
        assert!(scan("looking forward to the shift").is_empty());
        assert!(scan("VIP tables open at 10, wear all black").is_empty());
    }

    #[test]
    fn phone_numbers_are_flagged() {
        assert_eq!(scan("call me at 305-555-0192"), vec![REASON_PHONE]);
        assert_eq!(scan("call +1 (702) 555 0100 after 9"), vec![REASON_PHONE]);
    }

    #[test]
    fn short_digit_runs_are_not_phone_numbers() {
        assert!(scan("doors at 2200, pay is 45/hr").is_empty());
    }

    #[test]
    fn emails_are_flagged() {
        let reasons = scan("contact me at a@b.com");
        assert!(reasons.contains(&REASON_EMAIL));
    }

    #[test]
    fn handles_and_domains_are_flagged() {
        assert_eq!(scan("dm me @ava.collins"), vec![REASON_SOCIAL]);
        assert_eq!(scan("details on blueflame.club"), vec![REASON_SOCIAL]);
    }

    #[test]
    fn reasons_are_unioned_in_pattern_order() {
        let reasons = scan("text 3055550192 or mail ava@promo.net");
        assert_eq!(reasons, vec![REASON_PHONE, REASON_EMAIL, REASON_SOCIAL]);
    }

    #[test]
    fn reason_string_is_none_for_clean_scans() {
        assert_eq!(reason_string(&[]), None);
        assert_eq!(
            reason_string(&[REASON_PHONE, REASON_EMAIL]),
            Some("phone,email".to_string())
        );
    }
}
