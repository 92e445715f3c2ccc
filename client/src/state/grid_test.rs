use super::*;

fn camera(id: &str, status: &str, stream_url: Option<&str>) -> Camera {
    Camera {
        id: id.to_owned(),
        name: format!("Camera {id}"),
        location: "Hall".to_owned(),
        status: status.to_owned(),
        stream_url: stream_url.map(str::to_owned),
    }
}

// =============================================================
// StatusIndicator
// =============================================================

#[test]
fn online_status_is_ok() {
    assert_eq!(StatusIndicator::from_camera(&camera("1", "online", None)), StatusIndicator::Ok);
}

#[test]
fn any_other_status_is_alert() {
    for status in ["offline", "Online", "", "online ", "error"] {
        assert_eq!(
            StatusIndicator::from_camera(&camera("1", status, None)),
            StatusIndicator::Alert,
            "status {status:?}"
        );
    }
}

#[test]
fn indicator_classes_differ() {
    assert_ne!(StatusIndicator::Ok.class(), StatusIndicator::Alert.class());
    assert!(StatusIndicator::Alert.class().contains("alert"));
}

#[test]
fn alert_dot_uses_danger_token() {
    assert_eq!(StatusIndicator::Alert.style(), "background-color: var(--danger);");
    assert_eq!(StatusIndicator::Ok.style(), "");
}

// =============================================================
// Feed source
// =============================================================

#[test]
fn missing_stream_url_uses_placeholder() {
    assert_eq!(feed_src(&camera("1", "online", None)), PLACEHOLDER_FEED);
    assert_eq!(PLACEHOLDER_FEED, "/placeholder.svg?height=480&width=640");
}

#[test]
fn stream_url_is_used_verbatim() {
    let url = "http://10.0.0.5:8081/stream?x=1&y=2";
    assert_eq!(feed_src(&camera("1", "online", Some(url))), url);
}

// =============================================================
// CardView
// =============================================================

#[test]
fn card_dom_id_derives_from_camera_id() {
    assert_eq!(card_dom_id("1"), "camera-1");
    assert_eq!(card_dom_id("porch"), "camera-porch");
}

#[test]
fn card_view_collects_render_fields() {
    let view = CardView::new(&camera("2", "offline", None), false);
    assert_eq!(view.dom_id, "camera-2");
    assert_eq!(view.camera_id, "2");
    assert_eq!(view.name, "Camera 2");
    assert_eq!(view.location, "Hall");
    assert_eq!(view.feed_src, PLACEHOLDER_FEED);
    assert_eq!(view.feed_alt, "Camera 2 feed");
    assert_eq!(view.indicator, StatusIndicator::Alert);
    assert_eq!(view.expand_label(), "Expand");
}

#[test]
fn expanded_card_offers_collapse() {
    let view = CardView::new(&camera("2", "online", None), true);
    assert_eq!(view.expand_label(), "Collapse");
}

// =============================================================
// GridLayout
// =============================================================

#[test]
fn grid_layout_defaults_to_multi_column() {
    assert_eq!(GridLayout::default(), GridLayout::MultiColumn);
    assert_eq!(GridLayout::MultiColumn.template_columns(), "");
    assert_eq!(GridLayout::SingleColumn.template_columns(), "1fr");
}
