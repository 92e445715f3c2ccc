use super::*;

#[test]
fn clamp_dimension_uses_default_when_absent() {
    assert_eq!(clamp_dimension(None, DEFAULT_WIDTH), 640);
    assert_eq!(clamp_dimension(None, DEFAULT_HEIGHT), 480);
}

#[test]
fn clamp_dimension_bounds_extremes() {
    assert_eq!(clamp_dimension(Some(0), DEFAULT_WIDTH), 1);
    assert_eq!(clamp_dimension(Some(100_000), DEFAULT_WIDTH), MAX_DIMENSION);
    assert_eq!(clamp_dimension(Some(320), DEFAULT_WIDTH), 320);
}

#[test]
fn render_placeholder_sets_size_and_viewbox() {
    let svg = render_placeholder(640, 480);
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains("width=\"640\""));
    assert!(svg.contains("height=\"480\""));
    assert!(svg.contains("viewBox=\"0 0 640 480\""));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn render_placeholder_font_never_collapses() {
    let svg = render_placeholder(1, 1);
    assert!(svg.contains("font-size=\"8\""));
}

#[tokio::test]
async fn placeholder_svg_responds_with_svg_content_type() {
    let response = placeholder_svg(Query(PlaceholderQuery { width: Some(200), height: None }))
        .await
        .into_response();
    assert_eq!(response.status(), axum::http::StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/svg+xml");
}
