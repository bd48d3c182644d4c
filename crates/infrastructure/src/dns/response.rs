use async_trait::async_trait;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX};
use hickory_proto::rr::{Name, RData, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, ResponseHandler, ResponseInfo};
use hostsd_application::ports::ResponseSink;
use hostsd_domain::{Answer, AnswerData, DomainError};
use std::str::FromStr;
use tracing::{debug, error, warn};

fn parse_name(name: &str) -> Result<Name, DomainError> {
    let mut parsed =
        Name::from_str(name).map_err(|e| DomainError::InvalidDomainName(format!("{name}: {e}")))?;
    parsed.set_fqdn(true);
    Ok(parsed)
}

/// Wire form of one synthesized answer.
pub fn answer_to_record(answer: &Answer) -> Result<Record, DomainError> {
    let owner = parse_name(&answer.name)?;
    let rdata = match &answer.data {
        AnswerData::A(ip) => RData::A(A(*ip)),
        AnswerData::AAAA(ip) => RData::AAAA(AAAA(*ip)),
        AnswerData::CNAME(target) => RData::CNAME(CNAME(parse_name(target)?)),
        AnswerData::MX {
            preference,
            exchange,
        } => RData::MX(MX::new(*preference, parse_name(exchange)?)),
    };
    Ok(Record::from_rdata(owner, answer.ttl, rdata))
}

/// Sends the response for one hickory request.
///
/// Holds the `ResponseInfo` of the transmission so the handler can return it.
pub struct HickoryResponseSink<'a, R: ResponseHandler> {
    request: &'a Request,
    response_handle: R,
    info: Option<ResponseInfo>,
}

impl<'a, R: ResponseHandler> HickoryResponseSink<'a, R> {
    pub fn new(request: &'a Request, response_handle: R) -> Self {
        Self {
            request,
            response_handle,
            info: None,
        }
    }

    /// Outcome of the send, or a copy of the request header when nothing
    /// reached the transport.
    pub fn into_info(self) -> ResponseInfo {
        self.info
            .unwrap_or_else(|| ResponseInfo::from(*self.request.header()))
    }

    pub async fn send_error(mut self, code: ResponseCode) -> ResponseInfo {
        debug!(code = ?code, "Sending error response");
        let builder = MessageResponseBuilder::from_message_request(self.request);
        let mut header = Header::response_from_request(self.request.header());
        header.set_response_code(code);
        let response = builder.build(header, &[], &[], &[], &[]);

        match self.response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send error response");
                ResponseInfo::from(*self.request.header())
            }
        }
    }
}

#[async_trait]
impl<'a, R: ResponseHandler> ResponseSink for HickoryResponseSink<'a, R> {
    async fn send(&mut self, answers: Vec<Answer>) -> Result<(), DomainError> {
        let records: Vec<Record> = answers
            .iter()
            .filter_map(|answer| match answer_to_record(answer) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(
                        error = %e,
                        value = %answer.data.value(),
                        "Skipping answer that cannot be encoded"
                    );
                    None
                }
            })
            .collect();

        let builder = MessageResponseBuilder::from_message_request(self.request);
        let mut header = Header::response_from_request(self.request.header());
        header.set_authoritative(true);
        header.set_response_code(ResponseCode::NoError);
        let response = builder.build(header, records.iter(), &[], &[], &[]);

        match self.response_handle.send_response(response).await {
            Ok(info) => {
                self.info = Some(info);
                Ok(())
            }
            Err(e) => Err(DomainError::IoError(e.to_string())),
        }
    }
}
