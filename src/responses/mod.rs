pub mod assets;
pub mod html;
pub mod redirect;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use assets::file_response;
pub use html::{css_response, html_response};
pub use redirect::{htmx_redirect, see_other};
