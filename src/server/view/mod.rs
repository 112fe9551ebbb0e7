//! Server-rendered pages.
//!
//! Pages are plain dioxus components rendered to a string with `dioxus-ssr`; nothing is
//! hydrated on the client.

pub mod layout;
pub mod login;
pub mod student;

use axum::response::Html;
use dioxus::prelude::*;

/// Render a page element into a complete HTML document
///
/// dioxus has no `html` element, so the root tag is written around the rendered markup.
pub fn render(page: Element) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus_ssr::render_element(page)
    ))
}
