use super::{AnswerSynthesizer, ResolveQueryUseCase};
use crate::ports::{BlacklistPort, ResponseSink};
use hostsd_domain::{DnsRequest, DomainError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Full per-query pipeline: resolve, synthesize, send exactly once.
pub struct HandleDnsQueryUseCase {
    resolver: Arc<ResolveQueryUseCase>,
    synthesizer: AnswerSynthesizer,
    blacklist: Option<Arc<dyn BlacklistPort>>,
}

impl HandleDnsQueryUseCase {
    pub fn new(resolver: Arc<ResolveQueryUseCase>) -> Self {
        Self {
            resolver,
            synthesizer: AnswerSynthesizer::new(),
            blacklist: None,
        }
    }

    /// Flag queries from listed sources in the logs. They are still answered.
    pub fn with_blacklist(mut self, blacklist: Arc<dyn BlacklistPort>) -> Self {
        self.blacklist = Some(blacklist);
        self
    }

    /// Returns the number of answers sent. The sink is called once whether or
    /// not the store could answer.
    pub async fn execute<S: ResponseSink>(
        &self,
        request: &DnsRequest,
        sink: &mut S,
    ) -> Result<usize, DomainError> {
        if let Some(blacklist) = &self.blacklist {
            if blacklist.contains(&request.client_ip) {
                warn!(
                    client = %request.client_ip,
                    domain = %request.domain,
                    blacklisted = true,
                    "Query from blacklisted source"
                );
            }
        }

        let answers = match self.resolver.execute(request) {
            Some(resolution) => self.synthesizer.synthesize(&request.domain, &resolution),
            None => {
                debug!(
                    domain = %request.domain,
                    record_type = request.type_label(),
                    "No answer in local table"
                );
                Vec::new()
            }
        };

        let count = answers.len();
        sink.send(answers).await?;
        Ok(count)
    }
}
