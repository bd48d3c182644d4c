use async_trait::async_trait;
use hostsd_domain::{Answer, DomainError};

/// Outbound side of one query: finalizes the response with the given
/// answers and transmits it.
#[async_trait]
pub trait ResponseSink: Send {
    async fn send(&mut self, answers: Vec<Answer>) -> Result<(), DomainError>;
}
