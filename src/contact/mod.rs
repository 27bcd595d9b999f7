//! Contact form endpoint (`POST /api/contact`).
//!
//! | Outcome                    | Status | Body                                  |
//! |----------------------------|--------|---------------------------------------|
//! | any rule violated          | 400    | `Validation failed` + `details`       |
//! | possible spam + hard block | 403    | `Submission blocked` + `reason`       |
//! | accepted                   | 200    | `Message received successfully`       |
//! | unreadable body            | 500    | `Internal server error`               |
//! | no `spamAnalysis`          | 500    | `Internal server error`               |
//! | timestamp not a valid date | 500    | `Internal server error`               |
//!
//! Accepted submissions are logged only; nothing is stored or forwarded.

mod validate;

pub use validate::{ContactSubmission, SpamAnalysis, SubmissionError};

use crate::core::Reply;
use crate::log;
use crate::utils::date::to_iso_millis;
use chrono::{DateTime, Utc};
use serde_json::json;

/// Handle a raw request body.
pub fn respond(body: &[u8]) -> Reply {
    let submission: ContactSubmission = match serde_json::from_slice(body) {
        Ok(submission) => submission,
        Err(err) => {
            log!("error"; "contact: failed to read submission: {err}");
            return internal_error();
        }
    };

    let errors = submission.validate();
    if !errors.is_empty() {
        return Reply::json(
            400,
            &json!({ "success": false, "message": "Validation failed", "details": errors }),
        );
    }

    let spam = match submission.spam() {
        Ok(spam) => spam,
        Err(err) => return rejected(&err),
    };
    if spam.is_blocked() {
        let mut body = json!({ "success": false, "message": "Submission blocked" });
        if let Some(reason) = &spam.detected_reason {
            body["reason"] = json!(reason);
        }
        return Reply::json(403, &body);
    }

    let received = match submission.received_at() {
        Ok(received) => received,
        Err(err) => return rejected(&err),
    };

    log_submission(&submission, spam, &received);

    Reply::json(
        200,
        &json!({ "success": true, "message": "Message received successfully" }),
    )
}

fn internal_error() -> Reply {
    Reply::json(
        500,
        &json!({ "success": false, "message": "Internal server error" }),
    )
}

fn rejected(err: &SubmissionError) -> Reply {
    log!("error"; "contact: {err}");
    internal_error()
}

fn log_submission(submission: &ContactSubmission, spam: &SpamAnalysis, received: &DateTime<Utc>) {

    log!(
        "contact";
        "submission from {} <{}> at {}",
        submission.name.as_deref().unwrap_or_default().trim(),
        submission
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or("Not provided"),
        to_iso_millis(received)
    );
    log!("contact"; "{}", submission.message.as_deref().unwrap_or_default());

    if spam.is_possible_spam {
        log!(
            "warning";
            "possible spam detected: {}",
            spam.detected_reason.as_deref().unwrap_or("no reason given")
        );
    }
}
