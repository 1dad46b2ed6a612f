use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// 303 so the browser follows up a form POST with a GET.
pub fn see_other(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(303)
        .header("Location", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}

/// htmx swallows 3xx responses to its own requests; it navigates on `HX-Redirect` instead.
pub fn htmx_redirect(location: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("HX-Redirect", location)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
