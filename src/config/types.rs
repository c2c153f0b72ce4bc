use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::form::FieldId;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The external form-collection target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// URL the submission is POSTed to.
    #[serde(default = "default_endpoint_url")]
    pub url: String,
    /// External identifier for each form field.
    #[serde(default)]
    pub fields: FieldIdentifiers,
}

/// Maps each form field to the opaque key the external form expects.
///
/// These are pinned to one specific instance of the external form; a
/// different form instance has different identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIdentifiers {
    #[serde(default = "default_full_name_id")]
    pub full_name: String,
    #[serde(default = "default_email_id")]
    pub email: String,
    #[serde(default = "default_phone_id")]
    pub phone: String,
    #[serde(default = "default_address_id")]
    pub address: String,
    #[serde(default = "default_occupation_id")]
    pub occupation: String,
    #[serde(default = "default_date_of_birth_id")]
    pub date_of_birth: String,
    #[serde(default = "default_gender_id")]
    pub gender: String,
    #[serde(default = "default_feedback_id")]
    pub feedback: String,
}

impl FieldIdentifiers {
    /// External identifier for `field`.
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FullName => &self.full_name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Address => &self.address,
            FieldId::Occupation => &self.occupation,
            FieldId::DateOfBirth => &self.date_of_birth,
            FieldId::Gender => &self.gender,
            FieldId::Feedback => &self.feedback,
        }
    }
}

/// Logging settings. The terminal belongs to the UI, so logs go to a file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file path. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Filter used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_endpoint_url() -> String {
    "https://docs.google.com/forms/d/e/1FAIpQLSe3AQvuYHgj39YPDyZpAnsI9UWJXqyt8aAL2Mb5SnZ_U-ya0g/formResponse"
        .to_string()
}

fn default_full_name_id() -> String {
    "entry.482437711".to_string()
}

fn default_email_id() -> String {
    "entry.1208543708".to_string()
}

fn default_phone_id() -> String {
    "entry.267889870".to_string()
}

fn default_address_id() -> String {
    "entry.1975755708".to_string()
}

fn default_occupation_id() -> String {
    "entry.1057046364".to_string()
}

fn default_date_of_birth_id() -> String {
    "entry.771298172".to_string()
}

fn default_gender_id() -> String {
    "entry.1280650567".to_string()
}

fn default_feedback_id() -> String {
    "entry.1403712950".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
            fields: FieldIdentifiers::default(),
        }
    }
}

impl Default for FieldIdentifiers {
    fn default() -> Self {
        Self {
            full_name: default_full_name_id(),
            email: default_email_id(),
            phone: default_phone_id(),
            address: default_address_id(),
            occupation: default_occupation_id(),
            date_of_birth: default_date_of_birth_id(),
            gender: default_gender_id(),
            feedback: default_feedback_id(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}
