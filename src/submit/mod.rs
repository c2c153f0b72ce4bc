//! Submission adapter: field-identifier mapping and opaque delivery.

mod error;
mod query;
mod relay;

pub use error::SubmissionError;
pub use query::{encode_query, query_pairs};
pub use relay::{submit_contact, FormRelay, Submitter};
