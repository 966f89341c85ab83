/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse`, so handlers can return them
 * directly. The error is turned into a status code and a JSON body:
 *
 * ```json
 * {
 *   "error": "text or file required",
 *   "status": 400
 * }
 * ```
 *
 * Server-side failures are logged here and answered with `"internal"`.
 */

use axum::{
    response::{Response, IntoResponse},
    http::StatusCode,
    body::Body,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("[Server] Request failed: {}", self);
        } else {
            tracing::warn!("[Server] Request rejected ({}): {}", status.as_u16(), self.message());
        }

        let message = self.public_message();
        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap_or_else(|_| {
                let mut response = Response::new(Body::from("Internal Server Error"));
                *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                response
            })
    }
}
