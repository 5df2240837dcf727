//! Wire models for the video and form endpoints.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Which video endpoint a lookup goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoKind {
    Course,
    Teacher,
    Testimonial,
    Lesson,
}

impl VideoKind {
    /// Endpoint path for one record
    pub fn endpoint(&self, id: u64) -> String {
        match self {
            Self::Course => format!("/api/course-video/{id}/"),
            Self::Teacher => format!("/api/teacher-video/{id}/"),
            Self::Testimonial => format!("/api/testimonial-video/{id}/"),
            Self::Lesson => format!("/api/lesson-video/{id}/"),
        }
    }
}

impl fmt::Display for VideoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Course => write!(f, "course"),
            Self::Teacher => write!(f, "teacher"),
            Self::Testimonial => write!(f, "testimonial"),
            Self::Lesson => write!(f, "lesson"),
        }
    }
}

/// Payload the video endpoints return.
///
/// Every field is optional on the wire; a missing `success` counts as
/// failure. Failure responses arrive with a 404 status but still carry a
/// JSON body, so callers parse the body regardless of status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoPayload {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub video_url: Option<String>,

    #[serde(default)]
    pub video_file: Option<String>,

    #[serde(default)]
    pub preview_image: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

/// Which form endpoint a submission goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormTarget {
    /// Course application form
    Application,

    /// Contact form
    Contact,
}

impl FormTarget {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Application => "/apply/",
            Self::Contact => "/contact/",
        }
    }

    /// Toast title shown when this form submits successfully
    pub fn success_title(&self) -> &'static str {
        match self {
            Self::Application => "Ariza Yuborildi!",
            Self::Contact => "Xabar Yuborildi!",
        }
    }
}

impl fmt::Display for FormTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::Contact => write!(f, "contact"),
        }
    }
}

/// A course application submission
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub course: u64,
    pub message: String,
}

impl ApplicationForm {
    /// Fields in the order the form posts them
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("phone", self.phone.clone()),
            ("email", self.email.clone()),
            ("course", self.course.to_string()),
            ("message", self.message.clone()),
        ]
    }
}

/// A contact form submission
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Fields in the order the form posts them
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("phone", self.phone.clone()),
            ("email", self.email.clone()),
            ("message", self.message.clone()),
        ]
    }
}

/// Outcome of a form submission.
///
/// Validation failures arrive with a 400 status and a body carrying
/// per-field error lists keyed by field name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormOutcome {
    #[serde(default)]
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl FormOutcome {
    /// Collapse field errors into the single line the error toast shows.
    ///
    /// Field order is alphabetical, so the line is stable for a given
    /// response. With no details at all, falls back to a generic prompt.
    pub fn flattened_errors(&self) -> String {
        match &self.errors {
            Some(errors) if !errors.is_empty() => errors
                .values()
                .flatten()
                .cloned()
                .collect::<Vec<_>>()
                .join(", "),
            _ => "Please check the form and try again.".to_string(),
        }
    }
}
