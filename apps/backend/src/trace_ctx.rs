//! Task-local trace context for web requests.
//!
//! Lets any code on the request path (error responses, db error mapping)
//! read the current trace_id without threading it through every call.
//! Web-boundary only; domain code must not import this.

use std::cell::RefCell;

use tokio::task_local;

task_local! {
    static TRACE_ID: RefCell<Option<String>>;
}

/// The trace_id for the current task, or "unknown" outside a request scope.
pub fn trace_id() -> String {
    TRACE_ID
        .try_with(|cell| {
            cell.borrow()
                .as_ref()
                .cloned()
                .unwrap_or_else(|| "unknown".to_string())
        })
        .unwrap_or_else(|_| "unknown".to_string())
}

/// Run a future within a trace scope. Called by the request-trace
/// middleware; tests may call it directly.
pub async fn with_trace_id<F, R>(trace_id: String, future: F) -> R
where
    F: std::future::Future<Output = R>,
{
    TRACE_ID.scope(RefCell::new(Some(trace_id)), future).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_outside_scope() {
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn visible_inside_scope_and_reset_after() {
        let id = "trace-abc".to_string();

        let out = with_trace_id(id.clone(), async {
            assert_eq!(trace_id(), id);
            42
        })
        .await;

        assert_eq!(out, 42);
        assert_eq!(trace_id(), "unknown");
    }

    #[tokio::test]
    async fn nested_scopes_shadow_and_restore() {
        with_trace_id("outer".to_string(), async {
            assert_eq!(trace_id(), "outer");
            with_trace_id("inner".to_string(), async {
                assert_eq!(trace_id(), "inner");
            })
            .await;
            assert_eq!(trace_id(), "outer");
        })
        .await;
    }
}
