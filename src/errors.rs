use astra::Response;
use thiserror::Error;

/// Errors raised while routing or rendering a request.
///
/// Backend failures never end up here: views turn them into error states and
/// render them in place. These are for requests we cannot serve at all.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
