use super::*;

fn render_hint() -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(RwSignal::new(DashboardState::default()));
        view! { <VoiceHint/> }.to_html()
    })
}

#[test]
fn suggestion_is_the_first_span_under_indicator() {
    let html = render_hint();
    let indicator = html.find("alexa-indicator\"").expect("indicator rendered");
    let first_span = indicator + html[indicator..].find("<span").expect("span rendered");
    let suggestion = DashboardState::default().suggestion;
    let text_at = html.find(&suggestion).expect("suggestion rendered");
    assert!(first_span < text_at);
    assert_eq!(html.matches("<span").count(), 1);
}

#[test]
fn indicator_dot_is_not_a_span() {
    let html = render_hint();
    assert!(html.contains("<i class=\"alexa-indicator__dot\""));
    assert!(!html.contains("<span class=\"alexa-indicator__dot\""));
}
