use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde::Serialize;

use super::schema::{validate_field, Field, ValidationError};
use super::submit::SubmitError;

/// Payload handed to a [`Submitter`](super::submit::Submitter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub company: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactFormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Phone => &mut self.phone,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL
            .iter()
            .all(|&field| validate_field(field, self.get(field)).is_ok())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Default,
    Error,
    Success,
}

impl FieldStatus {
    pub fn border_class(self) -> &'static str {
        match self {
            FieldStatus::Default => "field-default",
            FieldStatus::Error => "field-error",
            FieldStatus::Success => "field-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Submitted,
    Failed(String),
}

/// Identifies one submission attempt so late completions from an earlier
/// attempt cannot move the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

/// Values, validation, touch tracking and submission lifecycle of one form.
#[derive(Debug, Clone)]
pub struct ContactFormState {
    values: ContactFormData,
    errors: BTreeMap<Field, ValidationError>,
    touched: BTreeSet<Field>,
    submission: SubmissionState,
    ticket: u64,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactFormState {
    pub fn new() -> Self {
        Self {
            values: ContactFormData::default(),
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            submission: SubmissionState::Idle,
            ticket: 0,
        }
    }

    pub fn values(&self) -> &ContactFormData {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn update_field(&mut self, field: Field, value: String) {
        match validate_field(field, &value) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
        *self.values.slot(field) = value;

        if let SubmissionState::Failed(_) = self.submission {
            debug!("contact form edited after failure, back to idle");
            self.submission = SubmissionState::Idle;
        }
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Error recorded by the last edit of `field`, if any.
    pub fn field_error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn field_status(&self, field: Field) -> FieldStatus {
        if !self.is_touched(field) {
            return FieldStatus::Default;
        }
        if self.errors.contains_key(&field) {
            return FieldStatus::Error;
        }
        if !self.value(field).is_empty() {
            return FieldStatus::Success;
        }
        FieldStatus::Default
    }

    pub fn is_valid(&self) -> bool {
        self.values.is_valid()
    }

    pub fn can_submit(&self) -> bool {
        let ready = matches!(
            self.submission,
            SubmissionState::Idle | SubmissionState::Failed(_)
        );
        ready && self.is_valid()
    }

    /// Enters `Submitting` and returns the payload to send, or `None` when the
    /// form is invalid or a submission is already running.
    pub fn begin_submit(&mut self) -> Option<(SubmissionTicket, ContactFormData)> {
        if !self.can_submit() {
            debug!("contact submit ignored in state {:?}", self.submission);
            return None;
        }
        self.ticket += 1;
        self.submission = SubmissionState::Submitting;
        debug!("contact submission #{} started", self.ticket);
        Some((SubmissionTicket(self.ticket), self.values.clone()))
    }

    /// Applies the submitter's result. Returns true when the form moved to
    /// `Submitted` and the caller should schedule the reset.
    pub fn finish_submit(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<(), SubmitError>,
    ) -> bool {
        if !self.is_current(ticket, &SubmissionState::Submitting) {
            return false;
        }
        match result {
            Ok(()) => {
                debug!("contact submission #{} delivered", ticket.0);
                self.submission = SubmissionState::Submitted;
                true
            }
            Err(err) => {
                debug!("contact submission #{} failed: {}", ticket.0, err);
                self.submission = SubmissionState::Failed(err.to_string());
                false
            }
        }
    }

    /// Clears the form after the success panel has been shown.
    pub fn reset_elapsed(&mut self, ticket: SubmissionTicket) {
        if !self.is_current(ticket, &SubmissionState::Submitted) {
            return;
        }
        let ticket = self.ticket;
        *self = Self::new();
        self.ticket = ticket;
    }

    fn is_current(&self, ticket: SubmissionTicket, expected: &SubmissionState) -> bool {
        ticket.0 == self.ticket && &self.submission == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        let mut form = ContactFormState::new();
        for (field, value) in [
            (Field::Name, "Ada Lovelace"),
            (Field::Email, "ada@example.com"),
            (Field::Company, "Analytical Engines"),
            (Field::Subject, "Automation pilot"),
            (Field::Message, "We would like a demo for our team."),
        ] {
            form.update_field(field, value.to_string());
            form.touch(field);
        }
        form
    }

    #[test]
    fn starts_empty_and_invalid() {
        let form = ContactFormState::new();
        assert_eq!(form.submission(), &SubmissionState::Idle);
        assert_eq!(form.values(), &ContactFormData::default());
        assert!(!form.is_valid());
        assert!(!form.can_submit());
        for field in Field::ALL {
            assert_eq!(form.field_status(field), FieldStatus::Default);
            assert!(form.field_error(field).is_none());
        }
    }

    #[test]
    fn untouched_fields_stay_default() {
        let mut form = ContactFormState::new();
        form.update_field(Field::Name, "A".to_string());
        form.update_field(Field::Email, "ada@example.com".to_string());

        assert_eq!(form.field_status(Field::Name), FieldStatus::Default);
        assert_eq!(form.field_status(Field::Email), FieldStatus::Default);
        assert!(form.field_error(Field::Name).is_some());

        form.touch(Field::Name);
        assert_eq!(form.field_status(Field::Name), FieldStatus::Error);
        assert_eq!(form.field_status(Field::Email), FieldStatus::Default);
    }

    #[test]
    fn status_follows_edits_after_blur() {
        let mut form = ContactFormState::new();
        form.update_field(Field::Name, "Al".to_string());
        form.touch(Field::Name);
        assert_eq!(form.field_status(Field::Name), FieldStatus::Success);

        form.update_field(Field::Name, String::new());
        assert_eq!(form.field_status(Field::Name), FieldStatus::Error);
        assert_eq!(
            form.field_error(Field::Name).map(|e| e.message),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn touched_empty_optional_field_is_default() {
        let mut form = ContactFormState::new();
        form.touch(Field::Phone);
        assert_eq!(form.field_status(Field::Phone), FieldStatus::Default);

        form.update_field(Field::Phone, "+1 555".to_string());
        assert_eq!(form.field_status(Field::Phone), FieldStatus::Success);
    }

    #[test]
    fn blur_without_edit_records_no_error() {
        let mut form = ContactFormState::new();
        form.touch(Field::Subject);
        assert!(form.field_error(Field::Subject).is_none());
        assert_eq!(form.field_status(Field::Subject), FieldStatus::Default);
    }

    #[test]
    fn validity_requires_the_five_required_fields() {
        let mut form = filled();
        assert!(form.value(Field::Phone).is_empty());
        assert!(form.is_valid());

        form.update_field(Field::Email, "not-an-email".to_string());
        assert!(!form.is_valid());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn full_lifecycle_clears_the_form() {
        let mut form = filled();
        form.update_field(Field::Phone, "+1 (555) 000-1111".to_string());
        form.touch(Field::Phone);

        let (ticket, payload) = form.begin_submit().expect("valid form submits");
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.phone, "+1 (555) 000-1111");
        assert_eq!(form.submission(), &SubmissionState::Submitting);
        assert!(!form.can_submit());

        assert!(form.finish_submit(ticket, Ok(())));
        assert_eq!(form.submission(), &SubmissionState::Submitted);

        form.reset_elapsed(ticket);
        assert_eq!(form.submission(), &SubmissionState::Idle);
        assert_eq!(form.values(), &ContactFormData::default());
        for field in Field::ALL {
            assert!(!form.is_touched(field));
            assert!(form.field_error(field).is_none());
        }
    }

    #[test]
    fn second_submit_while_submitting_is_ignored() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit().expect("valid form submits");
        assert!(form.begin_submit().is_none());
        assert_eq!(form.submission(), &SubmissionState::Submitting);

        assert!(form.finish_submit(ticket, Ok(())));
        assert!(!form.finish_submit(ticket, Ok(())));
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn stale_tickets_do_not_move_the_lifecycle() {
        let mut form = filled();
        let (first, _) = form.begin_submit().expect("valid form submits");
        form.finish_submit(first, Err(SubmitError::Rejected("offline".into())));

        let (second, _) = form.begin_submit().expect("retry allowed");
        assert!(!form.finish_submit(first, Ok(())));
        assert_eq!(form.submission(), &SubmissionState::Submitting);

        assert!(form.finish_submit(second, Ok(())));
        form.reset_elapsed(first);
        assert_eq!(form.submission(), &SubmissionState::Submitted);
        form.reset_elapsed(second);
        assert_eq!(form.submission(), &SubmissionState::Idle);

        // tickets keep counting after a reset
        for field in Field::ALL {
            form.update_field(field, filled().value(field).to_string());
        }
        let (third, _) = form.begin_submit().expect("valid form submits");
        assert_ne!(third, second);
        assert_ne!(third, first);
    }

    #[test]
    fn failure_keeps_values_and_allows_retry() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit().expect("valid form submits");
        let scheduled = form.finish_submit(ticket, Err(SubmitError::Rejected("server said no".into())));

        assert!(!scheduled);
        assert_eq!(
            form.submission(),
            &SubmissionState::Failed("submission rejected: server said no".to_string())
        );
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
        assert!(form.is_touched(Field::Name));
        assert!(form.can_submit());

        form.update_field(Field::Subject, "Automation pilot v2".to_string());
        assert_eq!(form.submission(), &SubmissionState::Idle);
    }

    #[test]
    fn reset_is_ignored_before_success() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit().expect("valid form submits");
        form.reset_elapsed(ticket);
        assert_eq!(form.submission(), &SubmissionState::Submitting);
        assert_eq!(form.value(Field::Name), "Ada Lovelace");
    }

    #[test]
    fn instances_are_independent() {
        let mut a = filled();
        let b = ContactFormState::new();
        a.begin_submit();
        assert_eq!(a.submission(), &SubmissionState::Submitting);
        assert_eq!(b.submission(), &SubmissionState::Idle);
        assert!(b.values().name.is_empty());
    }
}
