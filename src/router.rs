use crate::api::Backend;
use crate::domain::search::parse_page;
use crate::domain::{BookingForm, SearchCriteria};
use crate::errors::ServerError;
use crate::responses::{
    css_response, file_response, html_response, htmx_redirect, see_other, ResultResp,
};
use crate::templates::pages;
use crate::views::{drive, Command, DetailState, DetailView, SearchView};
use astra::Request;
use chrono::{Local, NaiveDate};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

const STYLESHEET: &str = include_str!("../static/main.css");
/// Local htmx build, relative to the working directory. The layout falls back
/// to the CDN copy when this is absent.
const HTMX_FILE: &str = "static/htmx.min.js";
const CONFIRMATION_PATH: &str = "/confirmation";
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, backend: &dyn Backend) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "routing request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => search_page(&req, backend),
        ("GET", "/search/results") => search_results(&req, backend),
        ("GET", "/bookings") => booking_page(&req),
        ("GET", "/bookings/details") => booking_details(&req, backend),
        ("POST", "/bookings") => submit_booking(req, backend),
        ("GET", "/confirmation") => html_response(pages::confirmation_page()),
        ("GET", "/static/main.css") => css_response(STYLESHEET),
        ("GET", "/static/htmx.js") => file_response(Path::new(HTMX_FILE), "text/javascript"),
        _ => Err(ServerError::NotFound),
    }
}

fn search_page(req: &Request, backend: &dyn Backend) -> ResultResp {
    let params = parse_query(req);
    let criteria = SearchCriteria::from_params(&params);
    let mut view = SearchView::new();

    // The search form carries no page field, so a submitted location starts at page 1.
    let commands = if criteria.is_search() && !params.contains_key("page") {
        vec![Command::FetchFilterOptions, view.submit(criteria)]
    } else {
        view.activate(criteria, parse_page(params.get("page")))
    };

    // Filter options are needed to draw the form. Listings are fetched by the
    // results region itself once the page is on screen.
    let (deferred, now): (Vec<Command>, Vec<Command>) = commands
        .into_iter()
        .partition(|c| matches!(c, Command::FetchListings { .. }));
    drive(&mut view, backend, now);

    let results_url = deferred.first().and_then(results_url);
    html_response(pages::search_page(&view, results_url.as_deref()))
}

fn search_results(req: &Request, backend: &dyn Backend) -> ResultResp {
    let params = parse_query(req);
    let mut view = SearchView::new();

    let command = view.load_page(
        SearchCriteria::from_params(&params),
        parse_page(params.get("page")),
    );
    drive(&mut view, backend, [command]);

    html_response(pages::results_section(&view, None))
}

fn booking_page(req: &Request) -> ResultResp {
    let params = parse_query(req);
    let mut view = DetailView::new();

    let details_url = view
        .activate(params.get("listing_id").map(String::as_str))
        .as_ref()
        .and_then(details_url);

    html_response(pages::detail_page(&view, details_url.as_deref(), today()))
}

fn booking_details(req: &Request, backend: &dyn Backend) -> ResultResp {
    let params = parse_query(req);
    let mut view = DetailView::new();

    let command = view.activate(params.get("listing_id").map(String::as_str));
    drive(&mut view, backend, command);

    html_response(pages::details_section(&view, None, today()))
}

fn submit_booking(req: Request, backend: &dyn Backend) -> ResultResp {
    let htmx = is_htmx(&req);
    let params = read_form(req)?;

    let listing_id = params
        .get("listing_id")
        .map(|id| id.trim())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ServerError::BadRequest("missing listing_id".into()))?;

    let mut view = DetailView::resume(listing_id);
    view.edit(BookingForm::from_params(&params));
    let command = view.submit();
    drive(&mut view, backend, command);

    if view.is_confirmed() {
        info!(listing_id, "booking accepted, redirecting to confirmation");
        return if htmx {
            htmx_redirect(CONFIRMATION_PATH)
        } else {
            see_other(CONFIRMATION_PATH)
        };
    }

    if htmx {
        return html_response(pages::booking_form(&view, today()));
    }

    // Without htmx the browser replaces the whole page, so draw the listing
    // again around the form.
    let command = view.reload();
    drive(&mut view, backend, command);

    match view.state() {
        DetailState::Loaded(_) => html_response(pages::detail_page(&view, None, today())),
        // The typed values matter more than the listing card.
        _ => html_response(pages::booking_form_page(&view, today())),
    }
}

fn results_url(command: &Command) -> Option<String> {
    match command {
        Command::FetchListings { criteria, page } => {
            Some(format!("/search/results?{}", criteria.query_string(*page)))
        }
        _ => None,
    }
}

fn details_url(command: &Command) -> Option<String> {
    match command {
        Command::FetchListing { listing_id } => {
            let query: String = url::form_urlencoded::Serializer::new(String::new())
                .append_pair("listing_id", listing_id)
                .finish();
            Some(format!("/bookings/details?{query}"))
        }
        _ => None,
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn is_htmx(req: &Request) -> bool {
    req.headers()
        .get("HX-Request")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn parse_pairs(input: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(input).into_owned().collect()
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    parse_pairs(req.uri().query().unwrap_or_default().as_bytes())
}

fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = req.into_body();
    let mut raw = Vec::new();

    // One byte past the limit is enough to tell an oversized body from a full one.
    body.reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut raw)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    if raw.len() as u64 > MAX_FORM_BYTES {
        warn!(limit = MAX_FORM_BYTES, "rejecting oversized form body");
        return Err(ServerError::BadRequest("form body too large".into()));
    }

    Ok(parse_pairs(&raw))
}
