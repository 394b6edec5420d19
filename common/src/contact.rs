use std::{fmt::Display, sync::LazyLock};

use regex::Regex;

pub const PENDING_LABEL: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";

// local-part@domain.tld with no whitespace and a single @
pub const EMAIL_REGEX: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_REGEX).expect("email pattern is a valid regex"));

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    // the form control name attribute
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValidationError {
    MissingField(ContactField),
    InvalidEmail,
}

// these are shown to the user verbatim
impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField(_) => write!(f, "Please fill in all fields."),
            Self::InvalidEmail => write!(f, "Please enter a valid email address."),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    // build from a lookup over named form controls; absent controls count as empty
    pub fn from_fields<F>(mut get: F) -> Self
    where
        F: FnMut(ContactField) -> Option<String>,
    {
        let mut field = |f| get(f).unwrap_or_default();

        ContactForm {
            name: field(ContactField::Name),
            email: field(ContactField::Email),
            subject: field(ContactField::Subject),
            message: field(ContactField::Message),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    // presence is checked before shape, so an empty email reports the missing field
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(missing) = ContactField::ALL
            .into_iter()
            .find(|f| self.field(*f).is_empty())
        {
            return Err(ValidationError::MissingField(missing));
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

// the submit control while a simulated send is in flight
//
// holds the label to put back once the send completes
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingSubmit {
    original_label: String,
}

impl PendingSubmit {
    pub fn begin(original_label: impl Into<String>) -> Self {
        PendingSubmit {
            original_label: original_label.into(),
        }
    }

    pub fn label(&self) -> &'static str {
        PENDING_LABEL
    }

    pub fn finish(self) -> String {
        self.original_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_owned(),
            email: "a@b.co".to_owned(),
            subject: "Hello".to_owned(),
            message: "Nice site".to_owned(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn empty_message_is_rejected() {
        let form = ContactForm {
            message: String::new(),
            ..filled()
        };

        let err = form.validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField(ContactField::Message));
        assert_eq!(err.to_string(), "Please fill in all fields.");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let form = ContactForm {
            email: "not-an-email".to_owned(),
            ..filled()
        };

        let err = form.validate().unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "Please enter a valid email address.");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn missing_controls_count_as_empty() {
        let form = ContactForm::from_fields(|field| match field {
            ContactField::Subject => None,
            other => Some(other.name().to_owned()),
        });

        assert_eq!(form.name, "name");
        assert_eq!(form.subject, "");
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField(ContactField::Subject))
        );
    }

    #[test]
    fn pending_submit_restores_label() {
        let pending = PendingSubmit::begin("Send Message");

        assert_eq!(pending.label(), "Sending...");
        assert_eq!(pending.finish(), "Send Message");
    }
}
