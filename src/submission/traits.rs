//! Trait abstraction for the submission client to enable mocking in tests

use super::client::{SubmissionError, SubmissionReceipt};
use super::payload::SubmissionPayload;
use async_trait::async_trait;

/// Sends finished applications to the loan-origination system
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionClientTrait: Send + Sync {
    /// POST one application. Never retries.
    async fn submit_application(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}
