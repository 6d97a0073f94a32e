//! HTML shell rendering.
//!
//! # Responsibilities
//! - Render the document the browser boots the app from
//! - Embed the resolved route state as JSON for the client
//! - Map outcomes to status codes (200 rendered, 404 not found)
//!
//! # Design Decisions
//! - `<` is escaped in the embedded JSON so it cannot close the script tag

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::shell::Outcome;

/// Render a navigation outcome as an HTML document.
pub fn render_outcome(outcome: &Outcome, base: &str) -> Response {
    let (status, title, view) = match outcome {
        Outcome::Rendered { page, .. } => {
            let view = page.view_id().to_string();
            (StatusCode::OK, view.clone(), view)
        }
        Outcome::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            "Página não encontrada".to_string(),
            "NotFound".to_string(),
        ),
    };

    let state = match serde_json::to_string(outcome) {
        Ok(json) => escape_script_json(&json),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize route state");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render route state")
                .into_response();
        }
    };

    let body = format!(
        "<!DOCTYPE html>\n\
         <html lang=\"pt-BR\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <base href=\"{base}/\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <div id=\"app\" data-view=\"{view}\"></div>\n\
         <script type=\"application/json\" id=\"route-state\">{state}</script>\n\
         </body>\n\
         </html>\n",
        base = escape_attr(base),
        title = escape_attr(&title),
        view = escape_attr(&view),
        state = state,
    );

    (status, Html(body)).into_response()
}

fn escape_script_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
