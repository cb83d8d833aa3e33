use super::resolve_guest::ResolveGuestUseCase;
use pve_dns_domain::{DnsRecord, DnsRequest, DomainError, RecordType};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::debug;

/// Validity duration attached to every synthesized record.
pub const ANSWER_TTL_SECS: u32 = 60;

/// Outcome of an address query: a populated record set, or no opinion,
/// in which case the host passes the query to its next handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAnswer {
    Records(Vec<DnsRecord>),
    NoAnswer,
}

pub struct AnswerQueryUseCase {
    resolver: Arc<ResolveGuestUseCase>,
}

impl AnswerQueryUseCase {
    pub fn new(resolver: Arc<ResolveGuestUseCase>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, request: &DnsRequest) -> Result<QueryAnswer, DomainError> {
        let addresses = self.resolver.execute(&request.domain).await?;
        debug!(domain = %request.domain, resolved = addresses.len(), "Guest resolution finished");
        Ok(synthesize(&request.domain, request.record_type, &addresses))
    }
}

/// Select the addresses matching the requested family and build the
/// record set. Mismatched families are skipped, never coerced; zero
/// emitted records is `NoAnswer`.
pub fn synthesize(name: &str, record_type: RecordType, addresses: &[IpAddr]) -> QueryAnswer {
    let records: Vec<DnsRecord> = addresses
        .iter()
        .filter(|address| record_type.matches_address(address))
        .map(|address| DnsRecord::new(name.to_string(), record_type, *address, ANSWER_TTL_SECS))
        .collect();

    if records.is_empty() {
        QueryAnswer::NoAnswer
    } else {
        QueryAnswer::Records(records)
    }
}
