//! The contact record and its enumerated field set.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Wire and input format for the date of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Identifies one of the eight fields of a [`ContactSubmission`].
///
/// Order matters: it is the on-screen order, the focus order and the order
/// in which fields are written to the outbound query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Phone,
    Address,
    Occupation,
    DateOfBirth,
    Gender,
    Feedback,
}

/// How a field is edited and drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    TextArea,
    /// One value out of a fixed list, shown as a dropdown-style selector.
    Select,
    /// One value out of a fixed list, shown as radio buttons.
    Radio,
}

impl FieldId {
    pub const ALL: [FieldId; 8] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Address,
        FieldId::Occupation,
        FieldId::DateOfBirth,
        FieldId::Gender,
        FieldId::Feedback,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone Number",
            FieldId::Address => "Address",
            FieldId::Occupation => "Occupation",
            FieldId::DateOfBirth => "Date of Birth",
            FieldId::Gender => "Gender",
            FieldId::Feedback => "Feedback",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::FullName => "John Doe",
            FieldId::Email => "john@example.com",
            FieldId::Phone => "(123) 456-7890",
            FieldId::Address => "Your address",
            FieldId::DateOfBirth => "YYYY-MM-DD",
            FieldId::Feedback => "Your feedback",
            FieldId::Occupation | FieldId::Gender => "",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Address | FieldId::Feedback => FieldKind::TextArea,
            FieldId::Occupation => FieldKind::Select,
            FieldId::Gender => FieldKind::Radio,
            FieldId::FullName | FieldId::Email | FieldId::Phone | FieldId::DateOfBirth => {
                FieldKind::Text
            }
        }
    }

    /// Key used for this field in the configuration file.
    pub fn config_key(self) -> &'static str {
        match self {
            FieldId::FullName => "full_name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Address => "address",
            FieldId::Occupation => "occupation",
            FieldId::DateOfBirth => "date_of_birth",
            FieldId::Gender => "gender",
            FieldId::Feedback => "feedback",
        }
    }

    /// True for fields edited by typing characters.
    pub fn is_textual(self) -> bool {
        matches!(self.kind(), FieldKind::Text | FieldKind::TextArea)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Error returned when parsing an enumerated field value fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {field} option")]
pub struct InvalidOption {
    pub field: FieldId,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Occupation {
    #[default]
    Student,
    Professional,
    Retired,
    Other,
}

impl Occupation {
    pub const ALL: [Occupation; 4] = [
        Occupation::Student,
        Occupation::Professional,
        Occupation::Retired,
        Occupation::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Occupation::Student => "Student",
            Occupation::Professional => "Professional",
            Occupation::Retired => "Retired",
            Occupation::Other => "Other",
        }
    }

    /// Next option, wrapping around.
    pub fn cycle(self, forward: bool) -> Self {
        cycle_in(&Self::ALL, self, forward)
    }
}

impl FromStr for Occupation {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidOption {
                field: FieldId::Occupation,
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    /// Step through the radio options. From "nothing selected" the first
    /// step lands on the first (or last, going backwards) option.
    pub fn cycle(current: Option<Self>, forward: bool) -> Self {
        match current {
            Some(gender) => cycle_in(&Self::ALL, gender, forward),
            None if forward => Gender::Male,
            None => Gender::Other,
        }
    }
}

impl FromStr for Gender {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidOption {
                field: FieldId::Gender,
                value: s.to_string(),
            })
    }
}

fn cycle_in<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let len = all.len();
    let index = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    };
    all[next]
}

/// One in-flight contact form submission.
///
/// Lives for a single form-fill session and is reset to
/// [`ContactSubmission::default`] after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub occupation: Occupation,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub feedback: String,
}

impl ContactSubmission {
    /// The value of `field` as written to the external form.
    ///
    /// Unset date of birth and gender are written as empty strings.
    pub fn wire_value(&self, field: FieldId) -> Cow<'_, str> {
        match field {
            FieldId::FullName => Cow::Borrowed(&self.full_name),
            FieldId::Email => Cow::Borrowed(&self.email),
            FieldId::Phone => Cow::Borrowed(&self.phone),
            FieldId::Address => Cow::Borrowed(&self.address),
            FieldId::Occupation => Cow::Borrowed(self.occupation.as_str()),
            FieldId::DateOfBirth => match self.date_of_birth {
                Some(date) => Cow::Owned(date.format(DATE_FORMAT).to_string()),
                None => Cow::Borrowed(""),
            },
            FieldId::Gender => Cow::Borrowed(self.gender.map(Gender::as_str).unwrap_or("")),
            FieldId::Feedback => Cow::Borrowed(&self.feedback),
        }
    }

    /// Mutable access to the free-text fields. `None` for the others.
    pub fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::FullName => Some(&mut self.full_name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Phone => Some(&mut self.phone),
            FieldId::Address => Some(&mut self.address),
            FieldId::Feedback => Some(&mut self.feedback),
            FieldId::Occupation | FieldId::DateOfBirth | FieldId::Gender => None,
        }
    }
}

/// Parse a date-of-birth draft. Anything that is not a calendar date in
/// `YYYY-MM-DD` form counts as unset.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).ok()
}
