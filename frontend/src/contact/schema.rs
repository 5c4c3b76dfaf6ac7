use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// The six inputs of the contact form, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Email,
    Company,
    Phone,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::Phone,
        Field::Subject,
        Field::Message,
    ];

    /// DOM id and payload key.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Phone => "phone",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Company => "Company",
            Field::Phone => "Phone Number",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@company.com",
            Field::Company => "Your Company",
            Field::Phone => "+1 (555) 123-4567",
            Field::Subject => "How can we help you?",
            Field::Message => "Tell us about your project and how we can help...",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Phone => "tel",
            _ => "text",
        }
    }

    pub fn rules(self) -> &'static [Rule] {
        match self {
            Field::Name => NAME_RULES,
            Field::Email => EMAIL_RULES,
            Field::Company => COMPANY_RULES,
            Field::Phone => &[],
            Field::Subject => SUBJECT_RULES,
            Field::Message => MESSAGE_RULES,
        }
    }

    pub fn is_required(self) -> bool {
        !self.rules().is_empty()
    }
}

/// A single predicate plus the message shown when it fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    MinLen(usize, &'static str),
    MaxLen(usize, &'static str),
    Email(&'static str),
}

impl Rule {
    fn check(&self, value: &str) -> Result<(), &'static str> {
        let passed = match *self {
            Rule::MinLen(min, _) => text_len(value) >= min,
            Rule::MaxLen(max, _) => text_len(value) <= max,
            Rule::Email(_) => is_email(value),
        };
        if passed {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    pub fn message(&self) -> &'static str {
        match *self {
            Rule::MinLen(_, message) | Rule::MaxLen(_, message) | Rule::Email(message) => message,
        }
    }
}

/// Length as the browser reports it for an input value (UTF-16 code units).
pub fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

const NAME_RULES: &[Rule] = &[
    Rule::MinLen(2, "Name must be at least 2 characters"),
    Rule::MaxLen(50, "Name must be less than 50 characters"),
];

const EMAIL_RULES: &[Rule] = &[Rule::Email("Please enter a valid email address")];

const COMPANY_RULES: &[Rule] = &[
    Rule::MinLen(2, "Company name must be at least 2 characters"),
    Rule::MaxLen(100, "Company name must be less than 100 characters"),
];

const SUBJECT_RULES: &[Rule] = &[
    Rule::MinLen(5, "Subject must be at least 5 characters"),
    Rule::MaxLen(100, "Subject must be less than 100 characters"),
];

const MESSAGE_RULES: &[Rule] = &[
    Rule::MinLen(10, "Message must be at least 10 characters"),
    Rule::MaxLen(1000, "Message must be less than 1000 characters"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: Field,
    pub message: &'static str,
}

/// Runs the field's rules in order and reports the first failure.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    for rule in field.rules() {
        rule.check(value)
            .map_err(|message| ValidationError { field, message })?;
    }
    Ok(())
}

// Dots are checked outside the pattern since the regex crate has no lookaround.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_values_fail_with_length_message() {
        let err = validate_field(Field::Name, "A").unwrap_err();
        assert_eq!(err.field, Field::Name);
        assert_eq!(err.to_string(), "Name must be at least 2 characters");

        let err = validate_field(Field::Subject, "Hey").unwrap_err();
        assert_eq!(err.message, "Subject must be at least 5 characters");

        let err = validate_field(Field::Message, "too short").unwrap_err();
        assert_eq!(err.message, "Message must be at least 10 characters");
    }

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(validate_field(Field::Name, "Al").is_ok());
        assert!(validate_field(Field::Name, &"x".repeat(50)).is_ok());
        assert_eq!(
            validate_field(Field::Name, &"x".repeat(51)).unwrap_err().message,
            "Name must be less than 50 characters"
        );

        assert!(validate_field(Field::Company, &"c".repeat(100)).is_ok());
        assert!(validate_field(Field::Company, &"c".repeat(101)).is_err());

        assert!(validate_field(Field::Subject, &"s".repeat(100)).is_ok());
        assert_eq!(
            validate_field(Field::Subject, &"s".repeat(101)).unwrap_err().message,
            "Subject must be less than 100 characters"
        );

        assert!(validate_field(Field::Message, &"m".repeat(10)).is_ok());
        assert!(validate_field(Field::Message, &"m".repeat(1000)).is_ok());
        assert_eq!(
            validate_field(Field::Message, &"m".repeat(1001)).unwrap_err().message,
            "Message must be less than 1000 characters"
        );
    }

    #[test]
    fn length_counts_utf16_code_units() {
        assert_eq!(text_len("é"), 1);
        assert_eq!(text_len("😀"), 2);

        // Characters outside the BMP take two units each
        assert!(validate_field(Field::Name, "😀").is_ok());
        assert!(validate_field(Field::Name, &"😀".repeat(25)).is_ok());
        assert_eq!(
            validate_field(Field::Name, &"😀".repeat(26)).unwrap_err().message,
            "Name must be less than 50 characters"
        );

        assert!(validate_field(Field::Name, "é").is_err());
        assert!(validate_field(Field::Name, &"ö".repeat(50)).is_ok());
        assert!(validate_field(Field::Name, &"ö".repeat(51)).is_err());
    }

    #[test]
    fn empty_required_field_reports_min_length() {
        assert_eq!(
            validate_field(Field::Company, "").unwrap_err().message,
            "Company name must be at least 2 characters"
        );
    }

    #[test]
    fn email_shape() {
        assert!(is_email("user@example.com"));
        assert!(is_email("first.last+tag@mail.example.co.uk"));
        assert!(is_email("USER@EXAMPLE.COM"));

        assert!(!is_email("not-an-email"));
        assert!(!is_email(""));
        assert!(!is_email("user@localhost"));
        assert!(!is_email(".user@example.com"));
        assert!(!is_email("user.@example.com"));
        assert!(!is_email("us..er@example.com"));
        assert!(!is_email("user@-example.com"));
        assert!(!is_email("user@example.c"));

        assert_eq!(
            validate_field(Field::Email, "not-an-email").unwrap_err().message,
            "Please enter a valid email address"
        );
    }

    #[test]
    fn phone_is_free_text() {
        assert!(!Field::Phone.is_required());
        assert!(validate_field(Field::Phone, "").is_ok());
        assert!(validate_field(Field::Phone, "call me maybe").is_ok());
    }

    #[test]
    fn every_other_field_is_required() {
        let required: Vec<Field> = Field::ALL
            .iter()
            .copied()
            .filter(|f| f.is_required())
            .collect();
        assert_eq!(
            required,
            vec![Field::Name, Field::Email, Field::Company, Field::Subject, Field::Message]
        );
    }
}
