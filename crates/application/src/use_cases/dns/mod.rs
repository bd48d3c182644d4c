mod handle_dns_query;
mod resolve_query;
mod synthesize_answers;

pub use handle_dns_query::HandleDnsQueryUseCase;
pub use resolve_query::{Resolution, ResolveQueryUseCase};
pub use synthesize_answers::AnswerSynthesizer;
