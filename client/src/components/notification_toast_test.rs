use super::*;

#[test]
fn toast_style_keeps_base_layout_in_every_phase() {
    for phase in [NotificationPhase::Visible, NotificationPhase::Fading] {
        let style = toast_style(phase);
        assert!(style.starts_with("position: fixed;"));
        assert!(style.contains("background-color: var(--success)"));
        assert!(style.contains("border-radius: var(--border-radius)"));
    }
}

#[test]
fn toast_style_switches_opacity_only() {
    let visible = toast_style(NotificationPhase::Visible);
    let fading = toast_style(NotificationPhase::Fading);
    assert!(visible.ends_with("opacity: 1; transition: opacity 0.5s ease;"));
    assert!(fading.ends_with("opacity: 0; transition: opacity 0.5s ease;"));
}
