//! Maps a [`ContactSubmission`] onto the external form's query string.

use std::borrow::Cow;

use url::form_urlencoded;

use crate::config::FieldIdentifiers;
use crate::form::{ContactSubmission, FieldId};

/// One `(identifier, value)` pair per field, in field order.
pub fn query_pairs<'a>(
    fields: &'a FieldIdentifiers,
    record: &'a ContactSubmission,
) -> Vec<(&'a str, Cow<'a, str>)> {
    FieldId::ALL
        .into_iter()
        .map(|field| (fields.get(field), record.wire_value(field)))
        .collect()
}

/// `application/x-www-form-urlencoded` query string for `record`.
pub fn encode_query(fields: &FieldIdentifiers, record: &ContactSubmission) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query_pairs(fields, record))
        .finish()
}
