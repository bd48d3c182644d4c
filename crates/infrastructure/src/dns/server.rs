use super::{HickoryResponseSink, RecordTypeMapper};
use hickory_proto::op::ResponseCode;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use hostsd_application::use_cases::HandleDnsQueryUseCase;
use hostsd_domain::{normalize_name, DnsRequest};
use std::sync::Arc;
use tracing::{debug, error};

/// hickory entry point for every UDP and TCP query of one worker.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        response_handle: R,
    ) -> ResponseInfo {
        let mut sink = HickoryResponseSink::new(request, response_handle);

        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return sink.send_error(ResponseCode::FormErr).await;
            }
        };

        let query = &request_info.query;
        let domain = normalize_name(&query.name().to_string());
        let hickory_record_type = query.query_type();
        let client_ip = request.src().ip();

        debug!(
            domain = %domain,
            record_type = ?hickory_record_type,
            client = %client_ip,
            protocol = ?request.protocol(),
            "DNS query received"
        );

        let dns_request = DnsRequest::new(
            domain,
            RecordTypeMapper::from_hickory(hickory_record_type),
            client_ip,
        );

        match self.use_case.execute(&dns_request, &mut sink).await {
            Ok(answers) => {
                debug!(domain = %dns_request.domain, answers, "Response sent");
            }
            Err(e) => {
                error!(domain = %dns_request.domain, error = %e, "Failed to send response");
            }
        }

        sink.into_info()
    }
}
