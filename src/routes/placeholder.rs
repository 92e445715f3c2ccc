//! Placeholder image for cameras without a stream.
//!
//! The dashboard points feed-less cards at `/placeholder.svg?height=480&width=640`;
//! this route renders a neutral grey frame of the requested size.

use axum::extract::Query;
use axum::http::header;
use axum::response::IntoResponse;
use serde::Deserialize;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const MAX_DIMENSION: u32 = 4096;

#[derive(Debug, Default, Deserialize)]
pub struct PlaceholderQuery {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// `GET /placeholder.svg` — grey SVG frame sized from the query.
pub async fn placeholder_svg(Query(query): Query<PlaceholderQuery>) -> impl IntoResponse {
    let width = clamp_dimension(query.width, DEFAULT_WIDTH);
    let height = clamp_dimension(query.height, DEFAULT_HEIGHT);
    ([(header::CONTENT_TYPE, "image/svg+xml")], render_placeholder(width, height))
}

pub(crate) fn clamp_dimension(value: Option<u32>, default: u32) -> u32 {
    value.unwrap_or(default).clamp(1, MAX_DIMENSION)
}

pub(crate) fn render_placeholder(width: u32, height: u32) -> String {
    let font_size = (width.min(height) / 12).max(8);
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\
         <rect width=\"100%\" height=\"100%\" fill=\"#2a2a2a\"/>\
         <text x=\"50%\" y=\"50%\" fill=\"#888\" font-family=\"sans-serif\" font-size=\"{font_size}\" \
         text-anchor=\"middle\" dominant-baseline=\"middle\">No Signal</text>\
         </svg>"
    )
}

#[cfg(test)]
#[path = "placeholder_test.rs"]
mod tests;
