//! Leaf types with no petshop dependencies: request correlation ids, the
//! [`Sensitive`] redaction wrapper, and the log field vocabulary in [`schema`].

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestContext, RequestId, TraceId};
pub use sensitive::Sensitive;
