//! Shared test utilities: record builders, stub submitters, mock endpoint.

#![allow(dead_code, unused_imports)]

pub mod mock_endpoint;

use chrono::NaiveDate;
use contactform::form::{ContactSubmission, Gender, Occupation};
use contactform::submit::{SubmissionError, Submitter};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A record that passes every validation rule.
pub fn valid_record() -> ContactSubmission {
    ContactSubmission {
        full_name: "A B".to_string(),
        email: "a@b.com".to_string(),
        phone: "1112223333".to_string(),
        address: "1 Main St, Springfield".to_string(),
        occupation: Occupation::Professional,
        date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 17),
        gender: Some(Gender::Other),
        feedback: "Great work & thanks!".to_string(),
    }
}

/// A localhost URL nothing is listening on.
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/formResponse", port)
}

/// What a [`StubSubmitter`] does when called.
#[derive(Debug, Clone, Copy)]
pub enum StubOutcome {
    Deliver,
    Fail,
}

/// Submitter that never touches the network and counts its calls.
#[derive(Clone)]
pub struct StubSubmitter {
    outcome: StubOutcome,
    calls: Arc<AtomicUsize>,
}

impl StubSubmitter {
    pub fn new(outcome: StubOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Submitter for StubSubmitter {
    async fn submit(&self, _record: &ContactSubmission) -> Result<(), SubmissionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            StubOutcome::Deliver => Ok(()),
            StubOutcome::Fail => Err(SubmissionError::InvalidEndpoint {
                url: "stub://unreachable".to_string(),
                source: url::Url::parse("::unreachable").unwrap_err(),
            }),
        }
    }
}
