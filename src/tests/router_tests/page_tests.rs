use crate::errors::ServerError;
use crate::router::handle;
use crate::templates::html_error_response;
use crate::tests::utils::{attr, body_text, get, select_all, text_of, StubBackend};
use scraper::Html;

#[test]
fn confirmation_page_links_back_to_search() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default();

    let resp = handle(get("/confirmation"), &backend)?;
    assert_eq!(resp.status(), 200);
    let doc = Html::parse_document(&body_text(resp));

    assert_eq!(text_of(&doc, "h1"), "Booking Confirmed!");
    assert!(text_of(&doc, "main").contains("Thank you for your booking!"));
    assert_eq!(attr(&doc, "a.btn", "href"), Some("/"));
    Ok(())
}

#[test]
fn stylesheet_is_served_as_css() -> Result<(), Box<dyn std::error::Error>> {
    let resp = handle(get("/static/main.css"), &StubBackend::default())?;

    assert_eq!(resp.status(), 200);
    let content_type = resp
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/css"));
    assert!(body_text(resp).contains(".when-busy"));
    Ok(())
}

#[test]
fn unknown_routes_are_not_found() {
    let backend = StubBackend::default();

    for uri in ["/admin", "/bookings/42", "/static/app.js"] {
        assert!(
            matches!(handle(get(uri), &backend), Err(ServerError::NotFound)),
            "{uri} should be a 404"
        );
    }
}

#[test]
fn error_pages_carry_status() {
    let resp = html_error_response(ServerError::NotFound);
    assert_eq!(resp.status(), 404);
    assert!(body_text(resp).contains("Error 404"));

    let resp = html_error_response(ServerError::BadRequest("missing listing_id".into()));
    assert_eq!(resp.status(), 400);
    assert!(body_text(resp).contains("missing listing_id"));

    assert_eq!(html_error_response(ServerError::InternalError).status(), 500);
}

#[test]
fn htmx_is_loaded_locally_with_cdn_fallback() -> Result<(), Box<dyn std::error::Error>> {
    let doc = Html::parse_document(&body_text(handle(get("/"), &StubBackend::default())?));

    let scripts = select_all(&doc, "head script");
    assert_eq!(scripts[0].value().attr("src"), Some("/static/htmx.js"));
    let fallback: String = scripts[1].text().collect();
    assert!(fallback.starts_with("window.htmx ||"));
    assert!(fallback.contains("unpkg.com/htmx.org@1.9.12"));
    Ok(())
}

