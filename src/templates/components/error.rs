use crate::errors::ServerError;
use crate::templates::desktop_layout;
use astra::{Body, Response, ResponseBuilder};
use maud::html;

/// Convert a ServerError into a proper HTML response page
pub fn html_error_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),

        ServerError::BadRequest(msg) => render_error(400, &msg),

        ServerError::InternalError => render_error(500, "Internal Server Error"),
    }
}

fn render_error(status: u16, message: &str) -> Response {
    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            section class="card narrow" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to search" } }
            }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
