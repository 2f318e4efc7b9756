use std::{fmt, future::Future};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    #[default]
    Join,
    Sponsor,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Sponsor => "sponsor",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Join => "MAKE OR JOIN A TEAM",
            Self::Sponsor => "SPONSOR THE LEAGUE",
        }
    }

    pub fn blurb(&self) -> &'static str {
        match self {
            Self::Join => "Enter your details below to get started with a team.",
            Self::Sponsor => "Interested in sponsoring? Let us know!",
        }
    }

    pub fn description_label(&self) -> &'static str {
        match self {
            Self::Join => "Team Details / Experience",
            Self::Sponsor => "Sponsorship Details",
        }
    }

    pub fn description_placeholder(&self) -> &'static str {
        match self {
            Self::Join => "Tell us about your team or basketball experience...",
            Self::Sponsor => "Tell us about your sponsorship interest...",
        }
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the email collaborator receives for one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: RequestKind,
}

impl ContactRequest {
    pub fn validate(&self) -> FieldErrors {
        FieldErrors::check(|field| match field {
            Field::Name => self.name.as_str(),
            Field::Email => self.email.as_str(),
            Field::PhoneNumber => self.phone_number.as_str(),
            Field::Description => self.description.as_str(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    PhoneNumber,
    Description,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::PhoneNumber,
        Field::Description,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Description => "description",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            Self::Name => "Name is required",
            Self::Email => "Email is required",
            Self::PhoneNumber => "Phone number is required",
            Self::Description => "Description is required",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone_number: Option<&'static str>,
    pub description: Option<&'static str>,
}

impl FieldErrors {
    fn check<'a>(value_of: impl Fn(Field) -> &'a str) -> Self {
        let mut errors = Self::default();
        for field in Field::ALL {
            if value_of(field).trim().is_empty() {
                *errors.slot(field) = Some(field.required_message());
            }
        }
        errors
    }

    fn slot(&mut self, field: Field) -> &mut Option<&'static str> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Description => &mut self.description,
        }
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::PhoneNumber => self.phone_number,
            Field::Description => self.description,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }

    pub fn count(&self) -> usize {
        Field::ALL.iter().filter(|f| self.get(**f).is_some()).count()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Editing,
    Submitting,
    Succeeded,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a request is already being sent")]
    InFlight,
    #[error("{} required field(s) missing", .0.count())]
    Invalid(FieldErrors),
    #[error("failed to send request")]
    SendFailed,
}

/// User-facing outcome of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Sent => "Request sent successfully!",
            Self::Failed => "Failed to send request. Please try again.",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn from_result(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => Self::Sent,
            Err(_) => Self::Failed,
        }
    }
}

/// Field values, touched flags and submission state of one open form.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    phone_number: String,
    description: String,
    touched: [bool; 4],
    errors: FieldErrors,
    state: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Description => &self.description,
        }
    }

    /// Updates a value as the user types. Never validates.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Description => &mut self.description,
        };
        *slot = value.into();
    }

    pub fn blur(&mut self, field: Field) {
        self.touched[Self::index(field)] = true;
        self.errors = self.check();
    }

    /// Message to show under `field`, once the user has left it.
    pub fn error(&self, field: Field) -> Option<&'static str> {
        if self.touched[Self::index(field)] {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// Validates everything and, when all fields are present, moves to
    /// `Submitting` and packages the request. A second call while a request is
    /// outstanding is rejected.
    pub fn begin_submit(&mut self, kind: RequestKind) -> Result<ContactRequest, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        self.touched = [true; 4];
        self.errors = self.check();
        if !self.errors.is_empty() {
            self.state = SubmitState::Editing;
            return Err(SubmitError::Invalid(self.errors));
        }
        self.state = SubmitState::Submitting;
        Ok(ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            description: self.description.clone(),
            kind,
        })
    }

    /// Resolves the outstanding submission. Success clears the form, failure
    /// keeps the values so the user can retry.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) -> Notice {
        let notice = Notice::from_result(&result);
        if result.is_ok() {
            *self = Self {
                state: SubmitState::Succeeded,
                ..Self::default()
            };
        } else {
            self.state = SubmitState::Editing;
        }
        notice
    }

    fn check(&self) -> FieldErrors {
        FieldErrors::check(|field| self.value(field))
    }

    fn index(field: Field) -> usize {
        match field {
            Field::Name => 0,
            Field::Email => 1,
            Field::PhoneNumber => 2,
            Field::Description => 3,
        }
    }
}

/// The external email-sending collaborator.
pub trait ContactSender {
    type Error: fmt::Display;

    fn send(&self, request: ContactRequest) -> impl Future<Output = Result<(), Self::Error>>;
}

/// Hands `request` to `sender` once. Every failure is logged and collapsed into
/// `SubmitError::SendFailed`.
pub async fn deliver<S: ContactSender>(
    sender: &S,
    request: ContactRequest,
) -> Result<(), SubmitError> {
    let kind = request.kind;
    sender.send(request).await.map_err(|e| {
        log::error!("Failed to send {kind} request: {e}");
        SubmitError::SendFailed
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub kind: RequestKind,
}

impl ModalState {
    pub fn open(&mut self, kind: RequestKind) {
        self.kind = kind;
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}
