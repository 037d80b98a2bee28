use crate::errors::ServerError;
use crate::templates::components::error_page;
use astra::{Body, Response, ResponseBuilder};

/// Convert a ServerError into a proper HTML error page
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    let message = match &err {
        // Don't leak export internals to the browser.
        ServerError::ExportError(_) => "Could not build the download.".to_string(),
        other => other.to_string(),
    };

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.to_string())
        .body(Body::from(error_page(status, &message).into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
