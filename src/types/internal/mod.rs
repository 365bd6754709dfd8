pub mod context;
pub mod pagination;
pub mod widget;

pub use context::{RequestContext, RequestId};
pub use pagination::PaginatedResult;
pub use widget::{Widget, WidgetPatch};
