//! Early-access request form for the institutions tokenizer.

/// Shortest accepted use-case description, in UTF-16 code units to agree
/// with the browser's own `value.length`.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

/// Field-level validation messages. Empty when the form is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryErrors {
    pub email: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl InquiryErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.description.is_none()
    }
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with text on both sides.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.contains('@') && !s.chars().any(char::is_whitespace);
    if !clean(local) || !clean(domain) {
        return false;
    }
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

pub fn validate(email: &str, description: &str) -> InquiryErrors {
    let email = if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Please enter a valid email address")
    } else {
        None
    };
    let description = if description.is_empty() {
        Some("Description is required")
    } else if utf16_len(description) < MIN_DESCRIPTION_CHARS {
        Some("Description must be at least 20 characters")
    } else {
        None
    };
    InquiryErrors { email, description }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Why a submit did not start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    Invalid,
    InFlight,
    AlreadySubmitted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InquiryForm {
    email: String,
    description: String,
    errors: InquiryErrors,
    phase: SubmitPhase,
}

impl InquiryForm {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn errors(&self) -> &InquiryErrors {
        &self.errors
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn description_chars(&self) -> usize {
        utf16_len(&self.description)
    }

    /// Editing a field clears that field's message.
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.errors.email = None;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.errors.description = None;
    }

    /// Validate and, if valid, move to [`SubmitPhase::Submitting`].
    ///
    /// Only one submit may be in flight.
    pub fn begin_submit(&mut self) -> Result<(), SubmitBlocked> {
        match self.phase {
            SubmitPhase::Submitting => return Err(SubmitBlocked::InFlight),
            SubmitPhase::Submitted => return Err(SubmitBlocked::AlreadySubmitted),
            SubmitPhase::Editing => {}
        }
        self.errors = validate(&self.email, &self.description);
        if !self.errors.is_empty() {
            tracing::debug!(errors = ?self.errors, "inquiry rejected");
            return Err(SubmitBlocked::Invalid);
        }
        self.phase = SubmitPhase::Submitting;
        Ok(())
    }

    /// Finish an in-flight submit. Returns false if none was in flight.
    pub fn complete(&mut self) -> bool {
        if self.phase != SubmitPhase::Submitting {
            return false;
        }
        self.phase = SubmitPhase::Submitted;
        tracing::info!("inquiry submitted");
        true
    }

    /// Clear fields, messages and phase for another request.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("ops@bank.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("a@sub.domain.io"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn both_fields_reported_at_once() {
        let errors = validate("", "short");
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.description, Some("Description must be at least 20 characters"));
        let errors = validate("nope", "");
        assert_eq!(errors.email, Some("Please enter a valid email address"));
        assert_eq!(errors.description, Some("Description is required"));
    }

    #[test]
    fn description_length_counts_utf16_units() {
        let ten_emoji = "\u{1F680}".repeat(10);
        assert_eq!(validate("a@b.co", &ten_emoji).description, None);
        let nine_emoji = "\u{1F680}".repeat(9);
        assert_eq!(
            validate("a@b.co", &nine_emoji).description,
            Some("Description must be at least 20 characters")
        );
        let mut form = InquiryForm::default();
        form.set_description("é".repeat(5) + &"\u{1F680}".repeat(2));
        assert_eq!(form.description_chars(), 9);
    }

    #[test]
    fn submit_lifecycle_with_single_in_flight_guard() {
        let mut form = InquiryForm::default();
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
        assert!(!form.errors().is_empty());

        form.set_email("ops@bank.com");
        assert_eq!(form.errors().email, None);
        form.set_description("Tokenizing a portfolio of commercial loans");
        assert_eq!(form.begin_submit(), Ok(()));
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));
        assert!(form.complete());
        assert!(!form.complete());
        assert_eq!(form.phase(), SubmitPhase::Submitted);
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::AlreadySubmitted));

        form.reset();
        assert_eq!(form, InquiryForm::default());
    }
}
