use maud::{html, Markup, PreEscaped, DOCTYPE};

const HTMX_SRC: &str = "/static/htmx.js";
const HTMX_CDN: &str = "https://unpkg.com/htmx.org@1.9.12/dist/htmx.min.js";

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · StayFinder" }
                link rel="stylesheet" href="/static/main.css";
                script src=(HTMX_SRC) {}
                // Only reached when the local copy failed to load.
                script { (PreEscaped(htmx_fallback())) }
            }
            body {
                header class="site-header" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#2563eb"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                    a href="/" class="brand" { "StayFinder" }
                    nav {
                        ul {
                            li { a href="/" { "Search" } }
                        }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}

fn htmx_fallback() -> String {
    format!(r#"window.htmx || document.write('<script src="{HTMX_CDN}"><\/script>')"#)
}
