use super::*;

#[test]
fn camera_decodes_numeric_id_as_string() {
    let camera: Camera = serde_json::from_str(
        r#"{"id":1,"name":"Front Door","location":"Entrance","status":"online"}"#,
    )
    .unwrap();
    assert_eq!(camera.id, "1");
    assert_eq!(camera.name, "Front Door");
    assert_eq!(camera.stream_url, None);
}

#[test]
fn camera_decodes_string_id_and_stream_url() {
    let camera: Camera = serde_json::from_str(
        r#"{"id":"camera1","name":"Porch","location":"Front","status":"offline","stream_url":"http://cam/1.mjpg"}"#,
    )
    .unwrap();
    assert_eq!(camera.id, "camera1");
    assert_eq!(camera.stream_url.as_deref(), Some("http://cam/1.mjpg"));
}

#[test]
fn camera_null_stream_url_is_none() {
    let camera: Camera =
        serde_json::from_str(r#"{"id":2,"name":"Garage","location":"Driveway","status":"online","stream_url":null}"#)
            .unwrap();
    assert_eq!(camera.stream_url, None);
}

#[test]
fn camera_rejects_boolean_id() {
    let result = serde_json::from_str::<Camera>(r#"{"id":true,"name":"x","location":"y","status":"online"}"#);
    assert!(result.is_err());
}

#[test]
fn camera_list_requires_array() {
    assert!(serde_json::from_str::<Vec<Camera>>(r#"{"cameras":[]}"#).is_err());
    assert!(serde_json::from_str::<Vec<Camera>>("[]").unwrap().is_empty());
}

#[test]
fn is_online_matches_exact_status_only() {
    let mut camera = Camera {
        id: "1".to_owned(),
        name: "Front Door".to_owned(),
        location: "Entrance".to_owned(),
        status: "online".to_owned(),
        stream_url: None,
    };
    assert!(camera.is_online());
    camera.status = "Online".to_owned();
    assert!(!camera.is_online());
    camera.status = "offline".to_owned();
    assert!(!camera.is_online());
}

#[test]
fn camera_serializes_without_missing_stream_url() {
    let camera = Camera {
        id: "7".to_owned(),
        name: "Yard".to_owned(),
        location: "Back".to_owned(),
        status: "online".to_owned(),
        stream_url: None,
    };
    let json = serde_json::to_value(&camera).unwrap();
    assert!(json.get("stream_url").is_none());
    assert_eq!(json["id"], "7");
}
