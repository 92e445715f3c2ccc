use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn list_cameras_returns_active_set() {
    let state = test_app_state();
    let Json(cameras) = list_cameras(State(state)).await;
    let ids: Vec<&str> = cameras.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["camera1", "camera2", "camera3"]);
    assert_eq!(cameras[1].status, "offline");
    assert_eq!(cameras[0].stream_url.as_deref(), Some("http://192.168.43.67/stream1.mjpg"));
}

#[tokio::test]
async fn list_cameras_reflects_removals() {
    let state = test_app_state();
    state.active.write().await.remove("camera2");
    let Json(cameras) = list_cameras(State(state)).await;
    assert_eq!(cameras.len(), 2);
    assert!(cameras.iter().all(|c| c.id != "camera2"));
}

#[tokio::test]
async fn list_cameras_serializes_wire_shape() {
    let state = test_app_state();
    let Json(cameras) = list_cameras(State(state)).await;
    let json = serde_json::to_value(&cameras).unwrap();
    assert_eq!(
        json[0],
        serde_json::json!({
            "id": "camera1",
            "name": "Front Door",
            "location": "Entrance",
            "status": "online",
            "stream_url": "http://192.168.43.67/stream1.mjpg"
        })
    );
    assert!(json[1].get("stream_url").is_none());
}

#[tokio::test]
async fn get_camera_finds_inactive_camera() {
    let state = test_app_state();
    state.active.write().await.clear();
    let Json(camera) = get_camera(State(state), Path("CAMERA3".to_owned())).await.unwrap();
    assert_eq!(camera.name, "Backyard");
}

#[tokio::test]
async fn get_camera_unknown_is_not_found() {
    let state = test_app_state();
    let err = get_camera(State(state), Path("camera9".to_owned())).await.unwrap_err();
    assert_eq!(err, StatusCode::NOT_FOUND);
}
