//! Form Validation
//!
//! Required-field checks run before any request is sent.

use thiserror::Error;

use crate::models::{FeedbackReport, NewArticle, Urgency};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
}

/// Create-article form fields, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleForm {
    pub title: String,
    pub content: String,
}

impl ArticleForm {
    /// Blank fields are rejected; accepted values are sent exactly as typed.
    pub fn validate(&self) -> Result<NewArticle, FormError> {
        require("title", &self.title)?;
        require("content", &self.content)?;
        Ok(NewArticle {
            title: self.title.clone(),
            content: self.content.clone(),
        })
    }
}

/// Feedback form fields, as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub issue_title: String,
    pub issue_description: String,
    pub customer_name: String,
    pub customer_email: String,
    pub urgency: Urgency,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<FeedbackReport, FormError> {
        let issue_title = require("issue title", &self.issue_title)?;
        let issue_description = require("issue description", &self.issue_description)?;
        let customer_name = require("name", &self.customer_name)?;
        let customer_email = require("email", &self.customer_email)?.to_lowercase();
        if !looks_like_email(&customer_email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(FeedbackReport {
            issue_title: issue_title.to_string(),
            issue_description: issue_description.to_string(),
            customer_name: customer_name.to_string(),
            customer_email,
            urgency: self.urgency,
        })
    }
}

fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(trimmed)
    }
}

/// Same shape check a browser applies to `<input type="email">`
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
