//! Request context and middleware for the REST API
//!
//! Provides a unified request context containing the shared request log
//! and request metadata, injected into all endpoints via middleware.

use axum::{
    extract::Request,
    http::{Method, Uri},
    middleware::Next,
    response::Response,
};
use herald::request_logs::RequestLogs;
use uuid::Uuid;

/// Request context containing the shared log and request metadata
#[derive(Clone)]
pub struct RequestContext {
    /// Unique ID for this request
    pub request_id: Uuid,
    /// HTTP method
    pub method: Method,
    /// Request URI
    pub uri: Uri,
    /// Shared request log
    pub logs: RequestLogs,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(method: Method, uri: Uri, logs: RequestLogs) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            method,
            uri,
            logs,
        }
    }

    /// Log an info message with request context
    pub async fn log_info(&self, message: &str, component: &str) {
        self.logs.info(&self.with_context(message), component).await;
    }

    /// Log a success message with request context
    pub async fn log_success(&self, message: &str, component: &str) {
        self.logs.success(&self.with_context(message), component).await;
    }

    /// Log a warning message with request context
    pub async fn log_warn(&self, message: &str, component: &str) {
        self.logs.warn(&self.with_context(message), component).await;
    }

    /// Log an error message with request context
    pub async fn log_error(&self, message: &str, component: &str) {
        self.logs.error(&self.with_context(message), component).await;
    }

    /// Prefix a message with the request's id, method and path
    fn with_context(&self, message: &str) -> String {
        format!("[{}] {} {} - {}", self.request_id, self.method, self.uri.path(), message)
    }
}

/// Global request log instance shared with the middleware
static GLOBAL_LOGS: once_cell::sync::OnceCell<RequestLogs> = once_cell::sync::OnceCell::new();

/// Initialize the global request log
pub fn init_global_logs(logs: RequestLogs) -> Result<(), RequestLogs> {
    GLOBAL_LOGS.set(logs)
}

/// Get the global request log instance
pub fn get_global_logs() -> &'static RequestLogs {
    GLOBAL_LOGS
        .get()
        .expect("Global request log should be initialized before serving")
}

/// Middleware to inject a RequestContext into all requests
pub async fn request_context_middleware(request: Request, next: Next) -> Response {
    let logs = get_global_logs().clone();

    let method = request.method().clone();
    let uri = request.uri().clone();

    let context = RequestContext::new(method, uri, logs);

    let start_time = std::time::Instant::now();
    context.log_info("Request started", "http-request").await;

    let mut request = request;
    request.extensions_mut().insert(context.clone());

    let response = next.run(request).await;

    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    context
        .log_info(
            &format!(
                "Request completed (Status: {}, Duration: {:.2}ms)",
                response.status().as_u16(),
                duration_ms
            ),
            "http-request",
        )
        .await;

    response
}
