//! Outbound delivery of a submission to the external form.
//!
//! # Opaque delivery
//!
//! The external form-collection target does not return anything a caller
//! can rely on: its answer is an HTML page (or an opaque redirect) whose
//! status says nothing about whether the entry was recorded. The relay
//! therefore never reads the response status or body. A submission counts
//! as delivered whenever the request itself went out without a transport
//! error. A `true` outcome is a best-effort signal, not a delivery receipt:
//! the endpoint may still have dropped the entry. Do not "fix" this by
//! inspecting the status code; that would turn a best-effort signal into a
//! false guarantee.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};

use crate::config::{EndpointConfig, FieldIdentifiers};
use crate::form::ContactSubmission;
use crate::submit::error::SubmissionError;
use crate::submit::query::encode_query;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Delivers one submission. The seam between the form container and the
/// network, so the container can be driven with a stub in tests.
pub trait Submitter: Send + Sync + 'static {
    /// Send `record`. `Ok(())` means the request went out, nothing more.
    fn submit(
        &self,
        record: &ContactSubmission,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;
}

/// reqwest-backed [`Submitter`] for the configured endpoint.
pub struct FormRelay {
    client: Client,
    endpoint: Url,
    fields: FieldIdentifiers,
}

impl FormRelay {
    pub fn new(config: &EndpointConfig) -> Result<Self, SubmissionError> {
        let endpoint =
            Url::parse(&config.url).map_err(|source| SubmissionError::InvalidEndpoint {
                url: config.url.clone(),
                source,
            })?;
        // No timeout of our own: reqwest's defaults apply.
        let client = Client::builder().build().map_err(SubmissionError::Client)?;

        Ok(Self {
            client,
            endpoint,
            fields: config.fields.clone(),
        })
    }

    /// Full request URL for `record`: the endpoint with the encoded fields
    /// as its query string.
    pub fn submission_url(&self, record: &ContactSubmission) -> Url {
        let mut url = self.endpoint.clone();
        url.set_query(Some(&encode_query(&self.fields, record)));
        url
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Submitter for FormRelay {
    async fn submit(&self, record: &ContactSubmission) -> Result<(), SubmissionError> {
        let url = self.submission_url(record);
        tracing::debug!(endpoint = %self.endpoint, "Submitting contact form");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .send()
            .await
            .map_err(|source| SubmissionError::Transport {
                host: self.endpoint.host_str().unwrap_or_default().to_string(),
                source,
            })?;

        // The answer is deliberately not inspected; see the module docs.
        drop(response);
        Ok(())
    }
}

/// Run `submitter` and fold the outcome into the boolean the form needs.
///
/// `true` only means no transport error occurred.
pub async fn submit_contact<S: Submitter>(submitter: &S, record: &ContactSubmission) -> bool {
    match submitter.submit(record).await {
        Ok(()) => {
            tracing::info!("Contact form sent");
            true
        }
        Err(err) => {
            tracing::warn!(kind = err.kind(), "Contact form submission failed: {}", err);
            false
        }
    }
}
