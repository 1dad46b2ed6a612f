use crate::api::{ApiError, BookingRequest};
use crate::domain::BookingForm;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    attr, body_text, form_body, get, post_form, sample_listing, select_all, text_of, StubBackend,
};
use crate::views::detail::{BOOKING_FALLBACK, INCOMPLETE_FORM};
use scraper::Html;

const LISTING_ID: &str = "10006546";

fn filled_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("listing_id", LISTING_ID),
        ("checkIn", "2026-11-01"),
        ("checkOut", "2026-11-04"),
        ("name", "Ada Lovelace"),
        ("email", "ada@example.com"),
        ("daytimePhone", "555-0100"),
        ("mobilePhone", "555-0101"),
        ("postalAddress", "1 Analytical Way"),
        ("homeAddress", "2 Engine Lane"),
    ]
}

fn expected_request() -> BookingRequest {
    BookingRequest::new(
        LISTING_ID,
        &BookingForm {
            check_in: "2026-11-01".into(),
            check_out: "2026-11-04".into(),
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
            daytime_phone: "555-0100".into(),
            mobile_phone: "555-0101".into(),
            postal_address: "1 Analytical Way".into(),
            home_address: "2 Engine Lane".into(),
        },
    )
}

fn header<'a>(resp: &'a astra::Response, name: &str) -> Option<&'a str> {
    resp.headers().get(name).and_then(|v| v.to_str().ok())
}

#[test]
fn booking_page_without_id_is_idle() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default();

    let resp = handle(get("/bookings"), &backend)?;
    assert_eq!(resp.status(), 200);
    let doc = Html::parse_document(&body_text(resp));

    assert_eq!(attr(&doc, "#details", "data-state"), Some("idle"));
    assert_eq!(attr(&doc, "#details", "hx-get"), None);
    assert!(text_of(&doc, "#details").contains("No property selected."));
    assert!(select_all(&doc, "#booking-form").is_empty());
    assert!(backend.listing_lookups.lock().unwrap().is_empty());
    Ok(())
}

#[test]
fn booking_page_defers_listing_fetch() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default();

    let doc = Html::parse_document(&body_text(handle(
        get("/bookings?listing_id=10006546"),
        &backend,
    )?));

    assert_eq!(attr(&doc, "#details", "data-state"), Some("loading"));
    assert_eq!(
        attr(&doc, "#details", "hx-get"),
        Some("/bookings/details?listing_id=10006546")
    );
    assert!(text_of(&doc, "#details").contains("Loading property details..."));
    assert!(backend.listing_lookups.lock().unwrap().is_empty());
    Ok(())
}

#[test]
fn details_fragment_renders_listing_and_form() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default()
        .with_listing(Ok(Some(sample_listing(LISTING_ID, "Ribeira Charming Duplex"))));

    let resp = handle(get("/bookings/details?listing_id=10006546"), &backend)?;
    assert_eq!(resp.status(), 200);
    let doc = Html::parse_document(&body_text(resp));

    assert_eq!(attr(&doc, "#details", "data-state"), Some("loaded"));
    assert_eq!(text_of(&doc, "#details h1"), "Ribeira Charming Duplex");
    assert!(text_of(&doc, ".facts").contains("Property Type:"));
    assert!(text_of(&doc, ".facts .price").contains("$120.50 per night"));
    assert!(text_of(&doc, ".facts").contains("★ 89"));

    assert_eq!(
        attr(&doc, "#booking-form input[name=listing_id]", "value"),
        Some(LISTING_ID)
    );
    assert_eq!(attr(&doc, "#booking-form", "hx-post"), Some("/bookings"));
    for name in [
        "checkIn",
        "checkOut",
        "name",
        "email",
        "daytimePhone",
        "mobilePhone",
        "postalAddress",
        "homeAddress",
    ] {
        let selector = format!("#booking-form [name={name}]");
        assert_eq!(
            attr(&doc, &selector, "required"),
            Some(""),
            "{name} should be required"
        );
    }

    let today = chrono::Local::now().date_naive().to_string();
    assert_eq!(attr(&doc, "#checkIn", "min"), Some(today.as_str()));
    assert_eq!(attr(&doc, "#checkOut", "min"), Some(today.as_str()));

    assert_eq!(*backend.listing_lookups.lock().unwrap(), vec![LISTING_ID]);
    Ok(())
}

#[test]
fn empty_listing_response_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default();

    let doc = Html::parse_document(&body_text(handle(
        get("/bookings/details?listing_id=gone"),
        &backend,
    )?));

    assert_eq!(attr(&doc, "#details", "data-state"), Some("not-found"));
    assert!(text_of(&doc, "#details").contains("Property not found"));
    assert!(select_all(&doc, ".alert-error").is_empty());
    assert!(select_all(&doc, "#booking-form").is_empty());
    Ok(())
}

#[test]
fn listing_fetch_error_is_shown() -> Result<(), Box<dyn std::error::Error>> {
    let backend =
        StubBackend::default().with_listing(Err(ApiError::Application("Listing not found".into())));

    let doc = Html::parse_document(&body_text(handle(
        get("/bookings/details?listing_id=10006546"),
        &backend,
    )?));

    assert_eq!(attr(&doc, "#details", "data-state"), Some("error"));
    assert_eq!(text_of(&doc, ".alert-error"), "Listing not found");
    Ok(())
}

#[test]
fn successful_post_redirects_to_confirmation() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default();

    let resp = handle(
        post_form("/bookings", &form_body(&filled_form()), false),
        &backend,
    )?;

    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), Some("/confirmation"));
    assert_eq!(*backend.bookings.lock().unwrap(), vec![expected_request()]);
    Ok(())
}

#[test]
fn htmx_post_redirects_with_header() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default();

    let resp = handle(
        post_form("/bookings", &form_body(&filled_form()), true),
        &backend,
    )?;

    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "HX-Redirect"), Some("/confirmation"));
    assert_eq!(header(&resp, "Location"), None);
    assert_eq!(backend.bookings.lock().unwrap().len(), 1);
    Ok(())
}

#[test]
fn rejected_booking_keeps_message_and_values() -> Result<(), Box<dyn std::error::Error>> {
    let backend =
        StubBackend::default().with_booking(Err(ApiError::Application("Dates unavailable".into())));

    let resp = handle(
        post_form("/bookings", &form_body(&filled_form()), true),
        &backend,
    )?;
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "HX-Redirect"), None);

    let doc = Html::parse_document(&body_text(resp));
    assert_eq!(text_of(&doc, "#booking-form .alert-error"), "Dates unavailable");
    assert_eq!(attr(&doc, "#checkIn", "value"), Some("2026-11-01"));
    assert_eq!(attr(&doc, "#checkOut", "value"), Some("2026-11-04"));
    assert_eq!(attr(&doc, "#checkOut", "min"), Some("2026-11-01"));
    assert_eq!(attr(&doc, "#name", "value"), Some("Ada Lovelace"));
    assert_eq!(attr(&doc, "#email", "value"), Some("ada@example.com"));
    assert_eq!(text_of(&doc, "#homeAddress"), "2 Engine Lane");
    assert_eq!(attr(&doc, "#book-now", "disabled"), None);

    // Fragment only; htmx swaps it over the existing form.
    assert!(select_all(&doc, "nav").is_empty());
    Ok(())
}

#[test]
fn plain_post_failure_renders_full_page_with_fallback() -> Result<(), Box<dyn std::error::Error>> {
    let backend =
        StubBackend::default().with_booking(Err(ApiError::Transport("connection reset".into())));

    let resp = handle(
        post_form("/bookings", &form_body(&filled_form()), false),
        &backend,
    )?;
    assert_eq!(resp.status(), 200);

    let doc = Html::parse_document(&body_text(resp));
    assert_eq!(text_of(&doc, ".alert-error"), BOOKING_FALLBACK);
    assert!(!select_all(&doc, "nav").is_empty());
    assert_eq!(attr(&doc, "#email", "value"), Some("ada@example.com"));
    Ok(())
}

#[test]
fn incomplete_form_is_not_forwarded() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default();
    let body = form_body(&[
        ("listing_id", LISTING_ID),
        ("name", "Ada Lovelace"),
        ("email", "  "),
    ]);

    let resp = handle(post_form("/bookings", &body, true), &backend)?;
    let doc = Html::parse_document(&body_text(resp));

    assert_eq!(text_of(&doc, ".alert-error"), INCOMPLETE_FORM);
    assert_eq!(attr(&doc, "#name", "value"), Some("Ada Lovelace"));
    assert!(backend.bookings.lock().unwrap().is_empty());
    Ok(())
}

#[test]
fn post_without_listing_is_bad_request() {
    let backend = StubBackend::default();
    let mut form = filled_form();
    form.retain(|(k, _)| *k != "listing_id");

    let result = handle(post_form("/bookings", &form_body(&form), false), &backend);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert!(backend.bookings.lock().unwrap().is_empty());
}

#[test]
fn oversized_form_is_rejected_without_booking() {
    let backend = StubBackend::default();
    let long_address = "A".repeat(70 * 1024);
    let mut form: Vec<(&str, &str)> = filled_form()
        .into_iter()
        .filter(|(k, _)| *k != "homeAddress")
        .collect();
    form.push(("homeAddress", &long_address));

    let result = handle(post_form("/bookings", &form_body(&form), false), &backend);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert!(backend.bookings.lock().unwrap().is_empty());
}

#[test]
fn form_at_the_size_limit_is_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default();
    let base = form_body(&filled_form());
    // Pad an unknown field so the body lands exactly on the limit.
    let padding = "x".repeat(64 * 1024 - base.len() - "&pad=".len());
    let body = format!("{base}&pad={padding}");
    assert_eq!(body.len(), 64 * 1024);

    let resp = handle(post_form("/bookings", &body, false), &backend)?;

    assert_eq!(resp.status(), 303);
    assert_eq!(backend.bookings.lock().unwrap().len(), 1);
    Ok(())
}

#[test]
fn plain_post_failure_redraws_listing_around_form() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default()
        .with_listing(Ok(Some(sample_listing(LISTING_ID, "Ribeira Charming Duplex"))))
        .with_booking(Err(ApiError::Application("Dates unavailable".into())));

    let resp = handle(
        post_form("/bookings", &form_body(&filled_form()), false),
        &backend,
    )?;
    assert_eq!(resp.status(), 200);

    let doc = Html::parse_document(&body_text(resp));
    assert_eq!(attr(&doc, "#details", "data-state"), Some("loaded"));
    assert_eq!(attr(&doc, "#details", "hx-get"), None);
    assert_eq!(text_of(&doc, "#details h1"), "Ribeira Charming Duplex");
    assert_eq!(text_of(&doc, "#booking-form .alert-error"), "Dates unavailable");
    assert_eq!(attr(&doc, "#name", "value"), Some("Ada Lovelace"));
    assert_eq!(*backend.listing_lookups.lock().unwrap(), vec![LISTING_ID]);
    assert_eq!(backend.bookings.lock().unwrap().len(), 1);
    Ok(())
}

#[test]
fn book_now_is_disabled_on_plain_submit() -> Result<(), Box<dyn std::error::Error>> {
    let backend = StubBackend::default()
        .with_listing(Ok(Some(sample_listing(LISTING_ID, "Ribeira Charming Duplex"))));

    let doc = Html::parse_document(&body_text(handle(
        get("/bookings/details?listing_id=10006546"),
        &backend,
    )?));

    assert_eq!(attr(&doc, "#book-now", "disabled"), None);
    assert_eq!(attr(&doc, "#booking-form", "hx-disabled-elt"), Some("#book-now"));
    assert!(attr(&doc, "#booking-form", "onsubmit")
        .unwrap_or_default()
        .contains("#book-now"));
    Ok(())
}
