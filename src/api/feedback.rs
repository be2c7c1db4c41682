//! Feedback Endpoint

use super::{ApiClient, ApiError, ApiResult, Operation, RawResponse};
use crate::models::{ErrorDetail, FeedbackAck, FeedbackReport};

impl ApiClient {
    /// `POST /feedback`
    pub async fn submit_feedback(&self, report: &FeedbackReport) -> ApiResult<FeedbackAck> {
        tracing::debug!(urgency = report.urgency.as_str(), "submitting feedback");
        let request = self.http.post(self.url("/feedback")).json(report);
        read_ack(self.send(request).await?)
    }
}

/// Rejections prefer a non-blank `detail`, falling back to the status text.
fn read_ack(raw: RawResponse) -> ApiResult<FeedbackAck> {
    if !raw.status.is_success() {
        let detail = serde_json::from_str::<ErrorDetail>(&raw.body)
            .ok()
            .map(|body| body.detail)
            .filter(|detail| !detail.trim().is_empty());
        return Err(match detail {
            Some(detail) => ApiError::Rejected(detail),
            None => raw.http_error(Operation::Feedback),
        });
    }
    raw.json(Operation::Feedback)
}
