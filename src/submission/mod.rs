//! Submission of finished applications to the loan-origination system

mod client;
mod payload;
mod traits;

pub use client::{HttpSubmissionClient, SubmissionError, SubmissionReceipt};
pub use payload::*;
pub use traits::SubmissionClientTrait;

#[cfg(test)]
pub use traits::MockSubmissionClientTrait;
