use std::net::IpAddr;

use poem::Request;

use super::request_id::RequestId;

/// Request context that flows from the API layer into logging
///
/// Carries the identifiers needed to correlate log lines for a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<IpAddr>,

    /// Unique identifier for this request (for tracing across layers)
    pub request_id: RequestId,
}

impl RequestContext {
    /// Create a RequestContext with a fresh request_id and no client address
    pub fn new() -> Self {
        Self {
            ip_address: None,
            request_id: RequestId::generate(),
        }
    }

    /// Build a RequestContext for an incoming HTTP request
    ///
    /// # Arguments
    /// * `req` - The HTTP request
    ///
    /// # Returns
    /// * RequestContext with a new request_id and the best-known client IP
    pub fn from_request(req: &Request) -> Self {
        let ctx = Self::new();
        match Self::extract_ip_address(req) {
            Some(ip) => ctx.with_ip_address(ip),
            None => ctx,
        }
    }

    /// Extract IP address from request headers
    ///
    /// Checks X-Forwarded-For, X-Real-IP, and falls back to remote address.
    pub fn extract_ip_address(req: &Request) -> Option<IpAddr> {
        // Check X-Forwarded-For header (proxy/load balancer)
        if let Some(forwarded) = req.header("X-Forwarded-For") {
            if let Some(ip) = forwarded.split(',').next() {
                return ip.trim().parse().ok();
            }
        }

        // Check X-Real-IP header (nginx)
        if let Some(real_ip) = req.header("X-Real-IP") {
            return real_ip.trim().parse().ok();
        }

        req.remote_addr().as_socket_addr().map(|addr| addr.ip())
    }

    /// Set the ip_address
    pub fn with_ip_address(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    /// Client address for log lines, "unknown" when none could be determined
    pub fn client(&self) -> String {
        self.ip_address
            .map(|ip| ip.to_string())
            .unwrap_or_else(|| "unknown".to_owned())
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
