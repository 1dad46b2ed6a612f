use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, warn};

/// Serves a file from disk. A missing file is a 404 so the page can fall
/// back to another copy.
pub fn file_response(path: &Path, content_type: &str) -> ResultResp {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "static asset not present");
            return Err(ServerError::NotFound);
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read static asset");
            return Err(ServerError::InternalError);
        }
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type)
        .header("Cache-Control", "public, max-age=86400")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}
