//! Newsletter signup state machine.
//!
//! Pure module: the signup form owns two cells of local state (the email
//! text and the feedback line) and mutates them synchronously on submit.
//! Nothing is persisted; handing the address to a real provider is a
//! deferred integration.

use once_cell::sync::Lazy;
use regex::Regex;

pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email.";
pub const MSG_SUBSCRIBED: &str = "Thanks for subscribing!";

// Loose shape check only: one "@" separating non-empty halves, with a dot
// somewhere after it. Not RFC 5322; spaces and doubled dots pass.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email shape pattern compiles"));

pub fn email_has_valid_shape(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Feedback line shown next to the form. Only ever one of these three.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    InvalidEmail,
    Subscribed,
}

impl Feedback {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Feedback::None => None,
            Feedback::InvalidEmail => Some(MSG_INVALID_EMAIL),
            Feedback::Subscribed => Some(MSG_SUBSCRIBED),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::InvalidEmail)
    }
}

/// Controlled state for the signup form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NewsletterForm {
    email: String,
    feedback: Feedback,
}

impl NewsletterForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Keystroke update. Feedback persists until the next submit.
    pub fn set_email<T: Into<String>>(&mut self, value: T) {
        self.email = value.into();
    }

    /// Synchronous submit: a malformed address leaves the text in place,
    /// a well-shaped one clears it.
    pub fn submit(&mut self) -> Feedback {
        if email_has_valid_shape(&self.email) {
            self.email.clear();
            self.feedback = Feedback::Subscribed;
        } else {
            self.feedback = Feedback::InvalidEmail;
        }
        self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_addresses_keep_text_and_show_error() {
        for input in ["", "plainaddress", "a@@b.c", "missing-at.example", "a@b"] {
            let mut form = NewsletterForm::default();
            form.set_email(input);

            let feedback = form.submit();

            assert_eq!(feedback, Feedback::InvalidEmail, "input: {input:?}");
            assert_eq!(feedback.message(), Some(MSG_INVALID_EMAIL));
            assert_eq!(form.email(), input, "text must be retained on failure");
        }
    }

    #[test]
    fn minimal_valid_shape_subscribes_and_clears() {
        let mut form = NewsletterForm::default();
        form.set_email("a@b.c");

        let feedback = form.submit();

        assert_eq!(feedback, Feedback::Subscribed);
        assert_eq!(feedback.message(), Some(MSG_SUBSCRIBED));
        assert_eq!(form.email(), "");
    }

    #[test]
    fn shape_check_is_intentionally_loose() {
        // Spaces and doubled dots are accepted; only the "@"-split shape
        // and a trailing dot segment are enforced.
        assert!(email_has_valid_shape("a b@c d.e f"));
        assert!(email_has_valid_shape("a@b..c"));
        assert!(!email_has_valid_shape("a@bc"));
        assert!(!email_has_valid_shape("@b.c"));
        assert!(!email_has_valid_shape("a@b."));
    }

    #[test]
    fn feedback_persists_across_keystrokes() {
        let mut form = NewsletterForm::default();
        form.set_email("a@b.c");
        form.submit();
        assert_eq!(form.feedback(), Feedback::Subscribed);

        form.set_email("typing again");
        assert_eq!(form.feedback(), Feedback::Subscribed);
    }

    #[test]
    fn next_submit_replaces_previous_feedback() {
        let mut form = NewsletterForm::default();
        form.set_email("a@b.c");
        form.submit();

        form.set_email("not an email");
        assert_eq!(form.submit(), Feedback::InvalidEmail);
        assert_eq!(form.email(), "not an email");
    }
}
