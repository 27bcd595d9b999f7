//! Contact form payload and validation rules.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Messages shorter than this (after trimming) are rejected.
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// Messages longer than this (untrimmed) are rejected.
pub const MAX_MESSAGE_LENGTH: usize = 400;

/// Largest distance from the epoch, in milliseconds, that a browser `Date` accepts.
const MAX_DATE_MILLIS: f64 = 8.64e15;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Client-side spam verdict sent along with the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpamAnalysis {
    #[serde(default)]
    pub is_possible_spam: bool,
    #[serde(default)]
    pub is_hard_block: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_reason: Option<String>,
}

impl SpamAnalysis {
    /// Possible spam that the client also asked to block outright.
    pub fn is_blocked(&self) -> bool {
        self.is_possible_spam && self.is_hard_block
    }
}

/// A submission that passed validation but still cannot be processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("submission carries no spam analysis")]
    MissingSpamAnalysis,

    #[error("timestamp {0} is not a representable date")]
    TimestampOutOfRange(f64),
}

/// A contact form submission as posted by the browser.
///
/// Every field is optional at the type level so that missing values surface
/// as validation errors rather than parse failures.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    /// Milliseconds since the Unix epoch; kept raw to detect non-numbers.
    #[serde(default)]
    pub timestamp: Option<serde_json::Value>,
    #[serde(default)]
    pub spam_analysis: Option<SpamAnalysis>,
}

impl ContactSubmission {
    /// Check every rule and return all violations, in a fixed order.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if is_blank(self.name.as_deref()) {
            errors.push("Name is required".to_string());
        }

        match self.message.as_deref() {
            message if is_blank(message) => errors.push("Message is required".to_string()),
            Some(message) if message.trim().chars().count() < MIN_MESSAGE_LENGTH => {
                errors.push(format!(
                    "Message must be at least {MIN_MESSAGE_LENGTH} characters"
                ));
            }
            Some(message) if message.chars().count() > MAX_MESSAGE_LENGTH => {
                errors.push(format!(
                    "Message must be {MAX_MESSAGE_LENGTH} characters or less"
                ));
            }
            _ => {}
        }

        if let Some(email) = self.email.as_deref()
            && !email.trim().is_empty()
            && !RE_EMAIL.is_match(email)
        {
            errors.push("Invalid email format".to_string());
        }

        if self.timestamp_millis().is_none() {
            errors.push("Invalid timestamp".to_string());
        }

        errors
    }

    /// Timestamp as a non-zero number of milliseconds.
    pub fn timestamp_millis(&self) -> Option<f64> {
        self.timestamp
            .as_ref()
            .and_then(serde_json::Value::as_f64)
            .filter(|ms| *ms != 0.0 && ms.is_finite())
    }

    /// Spam verdict sent by the client; required once validation passed.
    pub fn spam(&self) -> Result<&SpamAnalysis, SubmissionError> {
        self.spam_analysis
            .as_ref()
            .ok_or(SubmissionError::MissingSpamAnalysis)
    }

    /// Instant the form was submitted, truncated to whole milliseconds.
    pub fn received_at(&self) -> Result<DateTime<Utc>, SubmissionError> {
        let ms = self.timestamp_millis().unwrap_or(f64::NAN);
        if ms.abs() <= MAX_DATE_MILLIS
            && let Some(dt) = DateTime::from_timestamp_millis(ms.trunc() as i64)
        {
            return Ok(dt);
        }
        Err(SubmissionError::TimestampOutOfRange(ms))
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(value: serde_json::Value) -> ContactSubmission {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> serde_json::Value {
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "message": "Hello there, nice site!",
            "timestamp": 1_700_000_000_000u64,
            "spamAnalysis": { "isPossibleSpam": false, "isHardBlock": false }
        })
    }

    #[test]
    fn test_valid_submission() {
        assert!(submission(valid()).validate().is_empty());
    }

    #[test]
    fn test_all_violations_in_order() {
        let s = submission(json!({
            "name": "   ",
            "email": "not-an-email",
            "message": "short",
            "timestamp": 0
        }));
        assert_eq!(
            s.validate(),
            vec![
                "Name is required",
                "Message must be at least 10 characters",
                "Invalid email format",
                "Invalid timestamp",
            ]
        );
    }

    #[test]
    fn test_missing_fields() {
        let s = submission(json!({}));
        assert_eq!(
            s.validate(),
            vec!["Name is required", "Message is required", "Invalid timestamp"]
        );
    }

    #[test]
    fn test_message_length_bounds() {
        let mut value = valid();

        // Trimmed length counts for the minimum.
        value["message"] = json!("   123456789   ");
        assert_eq!(
            submission(value.clone()).validate(),
            vec!["Message must be at least 10 characters"]
        );

        value["message"] = json!("1234567890");
        assert!(submission(value.clone()).validate().is_empty());

        value["message"] = json!("x".repeat(400));
        assert!(submission(value.clone()).validate().is_empty());

        value["message"] = json!("x".repeat(401));
        assert_eq!(
            submission(value.clone()).validate(),
            vec!["Message must be 400 characters or less"]
        );

        // Multi-byte characters count once.
        value["message"] = json!("é".repeat(400));
        assert!(submission(value).validate().is_empty());
    }

    #[test]
    fn test_email_is_optional() {
        let mut value = valid();
        value["email"] = json!("");
        assert!(submission(value.clone()).validate().is_empty());

        value["email"] = json!("  ");
        assert!(submission(value.clone()).validate().is_empty());

        value.as_object_mut().unwrap().remove("email");
        assert!(submission(value.clone()).validate().is_empty());

        value["email"] = json!("a@b");
        assert_eq!(submission(value).validate(), vec!["Invalid email format"]);
    }

    #[test]
    fn test_timestamp_must_be_number() {
        let mut value = valid();
        value["timestamp"] = json!("1700000000000");
        assert_eq!(submission(value.clone()).validate(), vec!["Invalid timestamp"]);

        value["timestamp"] = json!(null);
        assert_eq!(submission(value).validate(), vec!["Invalid timestamp"]);
    }

    #[test]
    fn test_missing_spam_analysis() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("spamAnalysis");
        let s = submission(value);
        assert!(s.validate().is_empty());
        assert_eq!(s.spam(), Err(SubmissionError::MissingSpamAnalysis));
    }

    #[test]
    fn test_spam_flags_default_to_false() {
        let mut value = valid();
        value["spamAnalysis"] = json!({});
        assert_eq!(submission(value).spam(), Ok(&SpamAnalysis::default()));
    }

    #[test]
    fn test_received_at() {
        let s = submission(valid());
        assert_eq!(s.received_at().unwrap().timestamp_millis(), 1_700_000_000_000);

        let mut value = valid();
        value["timestamp"] = json!(1_700_000_000_000.9);
        assert_eq!(
            submission(value).received_at().unwrap().timestamp_millis(),
            1_700_000_000_000
        );
    }

    #[test]
    fn test_received_at_out_of_range() {
        let mut value = valid();
        value["timestamp"] = json!(1e300);
        let s = submission(value);

        // A huge number is still a number: validation passes.
        assert!(s.validate().is_empty());
        assert_eq!(s.received_at(), Err(SubmissionError::TimestampOutOfRange(1e300)));

        let mut value = valid();
        value["timestamp"] = json!(-9e15);
        assert!(submission(value).received_at().is_err());
    }

    #[test]
    fn test_blocked_needs_both_flags() {
        let spam = SpamAnalysis {
            is_possible_spam: true,
            is_hard_block: false,
            detected_reason: None,
        };
        assert!(!spam.is_blocked());
        assert!(
            SpamAnalysis {
                is_hard_block: true,
                ..spam
            }
            .is_blocked()
        );
    }
}
