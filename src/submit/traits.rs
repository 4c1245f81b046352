//! Trait abstraction for the submitter to enable mocking in tests

use super::error::SubmitError;
use crate::state::RsvpValues;
use async_trait::async_trait;

/// Sends one RSVP to wherever responses are collected
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    /// Submit all named field values. `Ok` only for a success response.
    async fn submit(&self, values: RsvpValues) -> Result<(), SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_mock_submitter_behind_trait_object() {
        let mut mock = MockFormSubmitter::new();
        mock.expect_submit()
            .withf(|values: &RsvpValues| values.name == "Jane Doe")
            .times(1)
            .returning(|_| Err(SubmitError::Rejected { status: 422 }));
        let submitter: Arc<dyn FormSubmitter> = Arc::new(mock);

        let values = RsvpValues {
            name: "Jane Doe".to_string(),
            ..Default::default()
        };
        let result = tokio_test::block_on(submitter.submit(values));
        assert!(matches!(result, Err(SubmitError::Rejected { status: 422 })));
    }
}
