//! Frontend Models
//!
//! Data structures matching the backend's JSON bodies.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Server-assigned article identifier
pub type ArticleId = u32;

/// Article data structure (matches backend `ArticleOut`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<FixedOffset>,
}

/// Body of `POST /posts`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
}

/// Feedback severity, consumed by backend automation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    #[default]
    Normal,
    Low,
}

impl Urgency {
    /// Order used by the urgency select, least urgent first
    pub const ALL: [Urgency; 4] = [Urgency::Low, Urgency::Normal, Urgency::High, Urgency::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Critical => "critical",
            Urgency::High => "high",
            Urgency::Normal => "normal",
            Urgency::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Critical => "Critical - outage or risk of data loss",
            Urgency::High => "High - blocks normal use",
            Urgency::Normal => "Normal - problem using a feature",
            Urgency::Low => "Low - question or suggestion",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Urgency::Critical => "Handled immediately and the on-call team is notified",
            Urgency::High => "Handled ahead of normal requests",
            Urgency::Normal => "Handled during working hours as soon as possible",
            Urgency::Low => "A confirmation email is sent automatically",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown urgency: {0}")]
pub struct UnknownUrgency(pub String);

impl FromStr for Urgency {
    type Err = UnknownUrgency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Urgency::Critical),
            "high" => Ok(Urgency::High),
            "normal" => Ok(Urgency::Normal),
            "low" => Ok(Urgency::Low),
            other => Err(UnknownUrgency(other.to_string())),
        }
    }
}

/// Body of `POST /feedback`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackReport {
    pub issue_title: String,
    pub issue_description: String,
    pub customer_name: String,
    pub customer_email: String,
    pub urgency: Urgency,
}

/// Acknowledgement returned by `POST /feedback`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedbackAck {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}

/// Error body the backend attaches to rejected requests
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorDetail {
    pub detail: String,
}

/// RFC 3339 timestamps; offset-less values are taken as UTC.
mod timestamp {
    use chrono::{DateTime, FixedOffset, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }

    pub fn parse(raw: &str) -> Option<DateTime<FixedOffset>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt);
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    }
}
