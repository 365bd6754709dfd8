// API layer - HTTP endpoints
pub mod health;
pub mod widgets;

pub use health::HealthApi;
pub use widgets::WidgetApi;

use poem::Request;

use crate::types::internal::context::RequestContext;

/// Behaviour shared by every API struct
pub trait Api {
    /// Build the RequestContext for an incoming request
    ///
    /// Should be called at the beginning of every endpoint.
    fn request_context(&self, req: &Request) -> RequestContext {
        let ctx = RequestContext::from_request(req);
        tracing::trace!("Request context created: {:?}", ctx);
        ctx
    }
}
