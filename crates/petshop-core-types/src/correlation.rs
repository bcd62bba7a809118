//! Correlation types for request tracking and tracing
//!
//! A caller that adapts the update workflow to its own transport creates a
//! [`RequestContext`] per request and threads it through the context-aware
//! entry point, so every log line and structured error can be tied back to
//! the originating request.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! correlation_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Fresh UUIDv7, so ids sort by creation time
            pub fn new() -> Self {
                Self(Uuid::now_v7().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Adopt an id minted upstream
            pub fn from_string(s: String) -> Self {
                Self(s)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

correlation_id! {
    /// One call to the update workflow
    RequestId
}

correlation_id! {
    /// Shared by every request of one end-to-end interaction
    TraceId
}

/// Ids attached to the `update_pet_details` span and to any `PsError` it returns
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub trace_id: Option<TraceId>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::with_request_id(RequestId::new())
    }

    pub fn with_request_id(request_id: RequestId) -> Self {
        Self {
            request_id,
            trace_id: None,
        }
    }

    pub fn with_trace_id(self, trace_id: TraceId) -> Self {
        Self {
            trace_id: Some(trace_id),
            ..self
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_differ() {
        assert_ne!(RequestId::new(), RequestId::new());
        assert_ne!(TraceId::new(), TraceId::new());
    }

    #[test]
    fn test_display_matches_as_str() {
        let id = RequestId::from("req-display");
        assert_eq!(id.to_string(), "req-display");
        assert_eq!(id.as_str(), "req-display");
    }

    #[test]
    fn test_default_context_has_request_id_only() {
        let ctx = RequestContext::default();
        assert!(!ctx.request_id.as_str().is_empty());
        assert!(ctx.trace_id.is_none());
    }

    #[test]
    fn test_context_keeps_upstream_ids() {
        let ctx = RequestContext::with_request_id(RequestId::from_string("req-42".to_string()))
            .with_trace_id(TraceId::from("trace-7"));

        assert_eq!(ctx.request_id.as_str(), "req-42");
        assert_eq!(ctx.trace_id.as_ref().map(TraceId::as_str), Some("trace-7"));
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&TraceId::from("trace-1")).unwrap();
        assert_eq!(json, "\"trace-1\"");

        let back: TraceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_str(), "trace-1");
    }
}
