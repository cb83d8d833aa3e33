use hickory_proto::op::ResponseCode;
use hickory_proto::rr::{Name, RData, Record};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use pve_dns_application::use_cases::{AnswerQueryUseCase, QueryAnswer};
use pve_dns_domain::{DnsRecord, DnsRequest, RecordType};
use std::net::IpAddr;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Hickory request handler fronting the answer-query use case.
///
/// Only A and AAAA queries reach the pipeline; everything else is
/// answered with NOTIMP up front. `NoAnswer` becomes an empty NOERROR
/// response and a failed resolution becomes SERVFAIL — this deployment
/// has no next handler to delegate to.
pub struct DnsServerHandler {
    use_case: Arc<AnswerQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<AnswerQueryUseCase>) -> Self {
        Self { use_case }
    }
}

#[async_trait::async_trait]
impl RequestHandler for DnsServerHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let qname = query.name().to_utf8();
        let client_ip = request.src().ip();

        let record_type = match RecordType::from_u16(u16::from(query.query_type())) {
            Some(rt) => rt,
            None => {
                debug!(record_type = ?query.query_type(), "Record type not handled");
                return send_error_response(request, &mut response_handle, ResponseCode::NotImp)
                    .await;
            }
        };

        info!(domain = %qname, record_type = %record_type, client = %client_ip, "DNS query received");

        let dns_request = DnsRequest::new(qname.clone(), record_type, client_ip);

        let answer = match self.use_case.execute(&dns_request).await {
            Ok(answer) => answer,
            Err(e) => {
                error!(domain = %qname, error = %e, "Guest resolution failed");
                return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                    .await;
            }
        };

        let records = match answer {
            QueryAnswer::Records(records) => records,
            QueryAnswer::NoAnswer => {
                debug!(domain = %qname, "No matching guest addresses");
                return send_empty_response(request, &mut response_handle).await;
            }
        };

        let answers: Vec<Record> = records.iter().map(to_wire_record).collect();
        debug!(domain = %qname, answers = answers.len(), "Sending response");

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *request.header();
        header.set_authoritative(true);
        header.set_recursion_available(false);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

fn to_wire_record(record: &DnsRecord) -> Record {
    let rdata = match record.address {
        IpAddr::V4(ipv4) => RData::A(hickory_proto::rr::rdata::A(ipv4)),
        IpAddr::V6(ipv6) => RData::AAAA(hickory_proto::rr::rdata::AAAA(ipv6)),
    };
    Record::from_rdata(
        Name::from_str(&record.domain).unwrap_or_else(|_| Name::root()),
        record.ttl,
        rdata,
    )
}

async fn send_empty_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
) -> ResponseInfo {
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_authoritative(true);
    header.set_recursion_available(false);
    let response = builder.build(header, &[], &[] as &[Record], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send empty response");
            ResponseInfo::from(*request.header())
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_response_code(code);
    header.set_recursion_available(false);
    let response = builder.build(header, &[], &[] as &[Record], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
