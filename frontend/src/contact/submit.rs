use std::fmt;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::TimeoutFuture;
use log::info;
use thiserror::Error;

use super::form::ContactFormData;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode the message: {0}")]
    Payload(#[from] serde_json::Error),
    #[allow(dead_code)]
    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Delivers a validated contact payload somewhere.
pub trait Submitter {
    fn submit(&self, data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

/// Pretends to talk to a server: waits `latency_ms`, then writes the payload
/// to the console.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    pub latency_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(latency_ms: u32) -> Self {
        Self { latency_ms }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let latency_ms = self.latency_ms;
        async move {
            TimeoutFuture::new(latency_ms).await;
            record(&data)
        }
        .boxed_local()
    }
}

/// The diagnostic sink for submitted messages.
fn record(data: &ContactFormData) -> Result<(), SubmitError> {
    let json = serde_json::to_string(data)?;
    info!("Form submitted: {}", json);
    if let Ok(value) = serde_wasm_bindgen::to_value(data) {
        gloo_console::log!("Form submitted:", value);
    }
    Ok(())
}

/// Shared handle so a submitter can be passed through component properties.
#[derive(Clone)]
pub struct SubmitterHandle(pub Rc<dyn Submitter>);

impl SubmitterHandle {
    pub fn new<S: Submitter + 'static>(submitter: S) -> Self {
        Self(Rc::new(submitter))
    }

    pub fn submit(&self, data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self.0.submit(data)
    }
}

impl PartialEq for SubmitterHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SubmitterHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SubmitterHandle")
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use serde_json::json;

    use super::*;
    use crate::contact::form::{ContactFormState, SubmissionState};
    use crate::contact::schema::Field;

    #[derive(Default)]
    struct Recording {
        sent: RefCell<Vec<ContactFormData>>,
        reject_with: Option<String>,
    }

    struct RecordingSubmitter(Rc<Recording>);

    impl Submitter for RecordingSubmitter {
        fn submit(&self, data: ContactFormData) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
            let recording = self.0.clone();
            async move {
                recording.sent.borrow_mut().push(data);
                match &recording.reject_with {
                    Some(reason) => Err(SubmitError::Rejected(reason.clone())),
                    None => Ok(()),
                }
            }
            .boxed_local()
        }
    }

    fn valid_form() -> ContactFormState {
        let mut form = ContactFormState::new();
        form.update_field(Field::Name, "Grace Hopper".into());
        form.update_field(Field::Email, "grace@navy.mil".into());
        form.update_field(Field::Company, "US Navy".into());
        form.update_field(Field::Subject, "Compiler questions".into());
        form.update_field(Field::Message, "Can your platform automate our COBOL pipeline?".into());
        form
    }

    #[test]
    fn payload_omits_empty_phone() {
        let data = valid_form().values().clone();
        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Grace Hopper",
                "email": "grace@navy.mil",
                "company": "US Navy",
                "subject": "Compiler questions",
                "message": "Can your platform automate our COBOL pipeline?",
            })
        );
    }

    #[test]
    fn injected_submitter_drives_the_lifecycle() {
        let recording = Rc::new(Recording::default());
        let handle = SubmitterHandle::new(RecordingSubmitter(recording.clone()));
        let mut form = valid_form();

        let (ticket, payload) = form.begin_submit().unwrap();
        let result = block_on(handle.submit(payload));
        assert!(form.finish_submit(ticket, result));
        assert_eq!(form.submission(), &SubmissionState::Submitted);

        let sent = recording.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "grace@navy.mil");
    }

    #[test]
    fn rejected_submission_fails_the_form() {
        let recording = Rc::new(Recording {
            reject_with: Some("mailbox full".into()),
            ..Default::default()
        });
        let handle = SubmitterHandle::new(RecordingSubmitter(recording));
        let mut form = valid_form();

        let (ticket, payload) = form.begin_submit().unwrap();
        let result = block_on(handle.submit(payload));
        assert!(!form.finish_submit(ticket, result));
        assert_eq!(
            form.submission(),
            &SubmissionState::Failed("submission rejected: mailbox full".into())
        );
    }

    #[test]
    fn handles_compare_by_identity() {
        let a = SubmitterHandle::new(SimulatedSubmitter::new(10));
        let b = SubmitterHandle::new(SimulatedSubmitter::new(10));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
