//! Contact details: email, phone, LinkedIn and GitHub profiles

use crate::processing::features::ContactInfo;
use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").expect("Invalid email regex")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?1[-.\s]?)?\(?([0-9]{3})\)?[-.\s]?([0-9]{3})[-.\s]?([0-9]{4})\b")
        .expect("Invalid phone regex")
});

static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/[\w-]+").expect("Invalid LinkedIn regex"));

static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/[\w-]+").expect("Invalid GitHub regex"));

pub struct ContactExtractor;

impl ContactExtractor {
    /// Keeps the first match of each kind.
    pub fn extract(&self, text: &str) -> ContactInfo {
        let lowered = text.to_lowercase();

        ContactInfo {
            email: EMAIL.find(text).map(|m| m.as_str().to_string()),
            phone: Self::phone(text),
            linkedin: LINKEDIN.find(&lowered).map(|m| m.as_str().to_string()),
            github: GITHUB.find(&lowered).map(|m| m.as_str().to_string()),
        }
    }

    /// Digits only, with a `+1` prefix when a country code was written.
    fn phone(text: &str) -> Option<String> {
        let cap = PHONE.captures(text)?;
        let mut phone = String::with_capacity(12);
        if cap.get(1).is_some() {
            phone.push_str("+1");
        }
        for group in 2..=4 {
            phone.push_str(cap.get(group)?.as_str());
        }
        Some(phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contact_kinds() {
        let text = "Jane Roe | Jane.Roe@Example.com | (555) 123-4567 | \
                    https://www.LinkedIn.com/in/jane-roe | github.com/janeroe";
        let contact = ContactExtractor.extract(text);

        assert_eq!(contact.email.as_deref(), Some("Jane.Roe@Example.com"));
        assert_eq!(contact.phone.as_deref(), Some("5551234567"));
        assert_eq!(contact.linkedin.as_deref(), Some("linkedin.com/in/jane-roe"));
        assert_eq!(contact.github.as_deref(), Some("github.com/janeroe"));
    }

    #[test]
    fn test_country_code_and_separators() {
        let contact = ContactExtractor.extract("Call +1 555.987.6543 anytime");
        assert_eq!(contact.phone.as_deref(), Some("+15559876543"));
    }

    #[test]
    fn test_first_email_wins() {
        let contact = ContactExtractor.extract("a@one.io then b@two.io");
        assert_eq!(contact.email.as_deref(), Some("a@one.io"));
    }

    #[test]
    fn test_missing_kinds_are_none() {
        let contact = ContactExtractor.extract("No contact details here at all");
        assert!(contact.is_empty());
    }
}
