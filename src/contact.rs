use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub const NOT_PROVIDED: &str = "Not provided";
pub const NOT_SPECIFIED: &str = "Not specified";
pub const NO_MESSAGE: &str = "No message provided";

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const NOT_CONFIGURED_MESSAGE: &str = "Discord webhook URL not configured";
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// How long the confirmation stays up before the form is cleared.
pub const CONFIRMATION_MS: u64 = 3000;

/// A contact form submission as it travels over the wire.
///
/// Every field is a plain string so the server can relay whatever it is given;
/// missing keys deserialize as empty strings, other values through
/// [`relayed_text`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    #[serde(deserialize_with = "relayed_text")]
    pub name: String,
    #[serde(deserialize_with = "relayed_text")]
    pub email: String,
    #[serde(deserialize_with = "relayed_text")]
    pub phone: String,
    #[serde(deserialize_with = "relayed_text")]
    pub company: String,
    #[serde(deserialize_with = "relayed_text")]
    pub project_type: String,
    #[serde(deserialize_with = "relayed_text")]
    pub budget: String,
    #[serde(deserialize_with = "relayed_text")]
    pub timeline: String,
    #[serde(deserialize_with = "relayed_text")]
    pub message: String,
}

/// Reads any JSON value as field text. `null`, `false`, `0` and `""` are
/// empty; other values keep their JSON rendering.
fn relayed_text<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    use serde_json::Value;

    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        other => other.to_string(),
    })
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,
    #[error("Email is required")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select a project type")]
    MissingProjectType,
    #[error("Message is required")]
    MissingMessage,
}

impl ContactSubmission {
    /// Checks required fields in display order and reports the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.project_type.is_empty() {
            return Err(ValidationError::MissingProjectType);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::MissingMessage);
        }
        Ok(())
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Company => &self.company,
            Field::ProjectType => &self.project_type,
            Field::Budget => &self.budget,
            Field::Timeline => &self.timeline,
            Field::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Company => &mut self.company,
            Field::ProjectType => &mut self.project_type,
            Field::Budget => &mut self.budget,
            Field::Timeline => &mut self.timeline,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Company,
    ProjectType,
    Budget,
    Timeline,
    Message,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Company,
        Field::ProjectType,
        Field::Budget,
        Field::Timeline,
        Field::Message,
    ];

    /// Label used in the relayed notification.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "👤 Name",
            Field::Email => "📧 Email",
            Field::Phone => "📱 Phone",
            Field::Company => "🏢 Company",
            Field::ProjectType => "🛠️ Project Type",
            Field::Budget => "💰 Budget",
            Field::Timeline => "⏰ Timeline",
            Field::Message => "📝 Message",
        }
    }

    /// Text substituted when the submitted value is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name | Field::Email | Field::Phone | Field::Company => NOT_PROVIDED,
            Field::ProjectType | Field::Budget | Field::Timeline => NOT_SPECIFIED,
            Field::Message => NO_MESSAGE,
        }
    }

    pub fn inline(self) -> bool {
        !matches!(self, Field::Message)
    }
}

/// One entry of an enumerated select: the wire value and its display label.
pub type Choice = (&'static str, &'static str);

pub const PROJECT_TYPES: &[Choice] = &[
    ("web-development", "Web Development"),
    ("backend-development", "Backend Development"),
    ("network-engineering", "Network Engineering"),
    ("server-management", "Server Management"),
    ("full-stack", "Full Stack Solution"),
    ("consultation", "Consultation"),
    ("other", "Other"),
];

pub const BUDGETS: &[Choice] = &[
    ("under-1k", "Under $1,000"),
    ("1k-5k", "$1,000 - $5,000"),
    ("5k-10k", "$5,000 - $10,000"),
    ("10k-25k", "$10,000 - $25,000"),
    ("25k-plus", "$25,000+"),
    ("discuss", "Let's Discuss"),
];

pub const TIMELINES: &[Choice] = &[
    ("asap", "ASAP"),
    ("1-month", "Within 1 month"),
    ("2-3-months", "2-3 months"),
    ("3-6-months", "3-6 months"),
    ("6-months-plus", "6+ months"),
    ("flexible", "Flexible"),
];

/// Body returned by `/api/contact` on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: String,
}

impl ContactAck {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Body returned by `/api/contact` on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFailure {
    pub error: String,
}

/// Discord-style notification built from a submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookMessage {
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: EmbedFooter,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

const EMBED_TITLE: &str = "🚀 New Contact Form Submission";
const EMBED_COLOR: u32 = 0x3b82f6;
const EMBED_FOOTER: &str = "Portfolio Contact Form";

impl WebhookMessage {
    pub fn from_submission(
        submission: &ContactSubmission,
        sent_at: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        let fields = Field::ALL
            .iter()
            .map(|&field| {
                let value = submission.field(field);
                EmbedField {
                    name: field.label().to_string(),
                    value: if value.is_empty() {
                        field.placeholder().to_string()
                    } else {
                        value.to_string()
                    },
                    inline: field.inline(),
                }
            })
            .collect();
        Self {
            embeds: vec![Embed {
                title: EMBED_TITLE.to_string(),
                color: EMBED_COLOR,
                fields,
                footer: EmbedFooter {
                    text: EMBED_FOOTER.to_string(),
                },
                timestamp: sent_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            }],
        }
    }
}

/// Where the contact form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Pending,
    Submitted,
}

/// Client-side state of the contact form, independent of the DOM.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub data: ContactSubmission,
    pub error: Option<String>,
    pub status: FormStatus,
}

impl ContactForm {
    pub fn update(&mut self, field: Field, value: String) {
        self.data.set_field(field, value);
        self.error = None;
    }

    /// Validates and, when the record is complete, moves to `Pending` and
    /// hands back the record to send. A second call while pending is not
    /// rejected here; the submit control is disabled instead.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if let Err(e) = self.data.validate() {
            self.error = Some(e.to_string());
            return None;
        }
        self.error = None;
        self.status = FormStatus::Pending;
        Some(self.data.clone())
    }

    /// Applies the server's verdict. Failures keep the entered data.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.status = FormStatus::Submitted;
                self.error = None;
            }
            Err(msg) => {
                self.status = FormStatus::Editing;
                self.error = Some(msg);
            }
        }
    }

    /// Runs once the confirmation has been shown for `CONFIRMATION_MS`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_pending(&self) -> bool {
        self.status == FormStatus::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            company: String::new(),
            project_type: "backend-development".to_string(),
            budget: String::new(),
            timeline: "asap".to_string(),
            message: "Need an API".to_string(),
        }
    }

    #[test]
    fn test_valid_submission_passes() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn test_each_required_field_blocks() {
        let mut s = valid();
        s.name = "   ".to_string();
        assert_eq!(s.validate(), Err(ValidationError::MissingName));

        let mut s = valid();
        s.email = String::new();
        assert_eq!(s.validate(), Err(ValidationError::MissingEmail));

        let mut s = valid();
        s.project_type = String::new();
        assert_eq!(s.validate(), Err(ValidationError::MissingProjectType));

        let mut s = valid();
        s.message = "\n\t".to_string();
        assert_eq!(s.validate(), Err(ValidationError::MissingMessage));
    }

    #[test]
    fn test_email_without_at_is_invalid() {
        let mut s = valid();
        s.email = "ada.example.com".to_string();
        assert_eq!(s.validate(), Err(ValidationError::InvalidEmail));
        assert_eq!(
            s.validate().unwrap_err().to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_validation_reports_first_failure_in_order() {
        let s = ContactSubmission {
            email: "nope".to_string(),
            ..Default::default()
        };
        assert_eq!(s.validate(), Err(ValidationError::MissingName));

        let s = ContactSubmission {
            name: "Ada".to_string(),
            email: "nope".to_string(),
            ..Default::default()
        };
        assert_eq!(s.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_deserialize_camel_case_with_missing_keys() {
        let s: ContactSubmission =
            serde_json::from_str(r#"{"name":"Ada","projectType":"other"}"#).unwrap();
        assert_eq!(s.name, "Ada");
        assert_eq!(s.project_type, "other");
        assert!(s.email.is_empty());
        assert!(s.timeline.is_empty());
    }

    #[test]
    fn test_deserialize_non_string_values() {
        let s: ContactSubmission = serde_json::from_str(
            r#"{"name":"Ada","phone":null,"company":false,"budget":0,"timeline":3,"message":true}"#,
        )
        .unwrap();
        assert_eq!(s.name, "Ada");
        assert!(s.phone.is_empty());
        assert!(s.company.is_empty());
        assert!(s.budget.is_empty());
        assert_eq!(s.timeline, "3");
        assert_eq!(s.message, "true");
    }

    #[test]
    fn test_webhook_message_substitutes_placeholders() {
        let sent_at = chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let msg = WebhookMessage::from_submission(&valid(), sent_at);
        let embed = &msg.embeds[0];
        assert_eq!(embed.fields.len(), 8);

        let value_of = |label: &str| {
            embed
                .fields
                .iter()
                .find(|f| f.name == label)
                .map(|f| f.value.clone())
                .unwrap()
        };
        assert_eq!(value_of("👤 Name"), "Ada Lovelace");
        assert_eq!(value_of("📱 Phone"), NOT_PROVIDED);
        assert_eq!(value_of("🏢 Company"), NOT_PROVIDED);
        assert_eq!(value_of("💰 Budget"), NOT_SPECIFIED);
        assert_eq!(value_of("⏰ Timeline"), "asap");
        assert_eq!(embed.timestamp, "2024-05-01T12:00:00.000Z");
        assert!(!embed.fields.last().unwrap().inline);
    }

    #[test]
    fn test_form_flow_success_then_reset() {
        let mut form = ContactForm::default();
        for field in Field::ALL {
            form.update(field, valid().field(field).to_string());
        }
        let sent = form.begin_submit().expect("valid form should submit");
        assert_eq!(sent, valid());
        assert!(form.is_pending());

        form.finish_submit(Ok(()));
        assert_eq!(form.status, FormStatus::Submitted);
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_form_flow_failure_keeps_data() {
        let mut form = ContactForm {
            data: valid(),
            ..Default::default()
        };
        assert!(form.begin_submit().is_some());
        form.finish_submit(Err(GENERIC_FAILURE_MESSAGE.to_string()));
        assert_eq!(form.status, FormStatus::Editing);
        assert_eq!(form.error.as_deref(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(form.data, valid());
    }

    #[test]
    fn test_form_error_clears_on_edit() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error.as_deref(), Some("Name is required"));
        assert_eq!(form.status, FormStatus::Editing);

        form.update(Field::Name, "A".to_string());
        assert!(form.error.is_none());
    }
}
