use super::*;
use crate::state::test_helpers::test_app_state;

fn body(intent: &str, camera: Option<&str>) -> Json<VoiceRequest> {
    Json(VoiceRequest { intent: intent.to_owned(), camera: camera.map(str::to_owned) })
}

#[test]
fn voice_error_to_status_maps_unknown_intent() {
    let err = VoiceError::UnknownIntent("Nope".to_owned());
    assert_eq!(voice_error_to_status(err), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn handle_voice_unknown_intent_is_bad_request() {
    let state = test_app_state();
    let err = handle_voice(State(state), body("Nope", None)).await.unwrap_err();
    assert_eq!(err, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn handle_voice_remove_updates_shared_active_set() {
    let state = test_app_state();
    let Json(resp) = handle_voice(State(state.clone()), body("RemoveCameraIntent", Some("camera1")))
        .await
        .unwrap();
    assert_eq!(resp.speech, "Removed camera1 from display.");
    assert!(resp.end_session);
    assert_eq!(state.active.read().await.ids(), ["camera2", "camera3"]);
}

#[tokio::test]
async fn handle_voice_show_after_remove_all_rebuilds_order() {
    let state = test_app_state();
    handle_voice(State(state.clone()), body("RemoveCameraIntent", Some("all"))).await.unwrap();
    handle_voice(State(state.clone()), body("ShowCameraIntent", Some("camera3"))).await.unwrap();
    handle_voice(State(state.clone()), body("ShowCameraIntent", Some("camera1"))).await.unwrap();
    assert_eq!(state.active.read().await.ids(), ["camera3", "camera1"]);
}

#[tokio::test]
async fn handle_voice_launch_keeps_session_open() {
    let state = test_app_state();
    let Json(resp) = handle_voice(State(state), body("LaunchRequest", None)).await.unwrap();
    assert!(!resp.end_session);
}
