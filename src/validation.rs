//! Form Validation
//!
//! Every field is checked on each submit so all messages show at once.
//! A field with no entry in the map is valid.

use std::collections::BTreeMap;

use crate::models::{NewQuestion, PasswordUpdate};

pub const QUESTION_PASSWORD_MIN_CHARS: usize = 4;

/// Field name -> message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    fn check(&mut self, field: &'static str, ok: bool, message: &'static str) {
        if !ok {
            self.0.insert(field, message);
        }
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

pub fn validate_password_update(form: &PasswordUpdate) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check("curPassword", !form.cur_password.is_empty(), "Enter your current password.");
    errors.check("newPassword", !form.new_password.is_empty(), "Enter a new password.");
    errors.check(
        "newPasswordCheck",
        !form.new_password_check.is_empty() && form.new_password_check == form.new_password,
        "Passwords do not match.",
    );
    errors
}

pub fn validate_question(draft: &NewQuestion) -> FieldErrors {
    let mut errors = FieldErrors::default();
    errors.check("title", !draft.title.trim().is_empty(), "Enter a title.");
    errors.check("writer", !draft.writer.trim().is_empty(), "Enter your name.");
    errors.check("content", !draft.content.trim().is_empty(), "Enter your inquiry.");
    errors.check(
        "password",
        draft.password.chars().count() >= QUESTION_PASSWORD_MIN_CHARS,
        "Password must be at least 4 characters.",
    );
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pw(cur: &str, new: &str, check: &str) -> PasswordUpdate {
        PasswordUpdate {
            cur_password: cur.into(),
            new_password: new.into(),
            new_password_check: check.into(),
        }
    }

    #[test]
    fn test_password_update_valid() {
        assert!(validate_password_update(&pw("old", "new", "new")).is_valid());
    }

    #[test]
    fn test_password_update_reports_every_field() {
        let errors = validate_password_update(&pw("", "", ""));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("curPassword"), Some("Enter your current password."));
    }

    #[test]
    fn test_password_check_must_match() {
        let errors = validate_password_update(&pw("old", "new", "neW"));
        assert_eq!(errors.get("newPasswordCheck"), Some("Passwords do not match."));
        assert_eq!(errors.get("newPassword"), None);
    }

    #[test]
    fn test_question_draft() {
        let mut draft = NewQuestion {
            title: "Quote".into(),
            writer: "Kim".into(),
            content: "Price for 40m?".into(),
            password: "1234".into(),
        };
        assert!(validate_question(&draft).is_valid());

        draft.password = "123".into();
        draft.title = "  ".into();
        let errors = validate_question(&draft);
        assert_eq!(errors.len(), 2);
        assert!(errors.get("password").is_some());
    }
}
