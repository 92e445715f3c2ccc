//! Rotating voice-command suggestion banner.

#[cfg(test)]
#[path = "voice_hint_test.rs"]
mod voice_hint_test;

use std::time::Duration;

/// Interval between suggestion changes.
pub const TICK: Duration = Duration::from_secs(10);

/// Phrases the banner rotates through.
pub const VOICE_HINTS: [&str; 3] = ["Alexa, Show Camera one", "Alexa, Display all cameras", "Alexa, open cameras"];

/// Banner text for a hint.
#[must_use]
pub fn suggestion_text(hint: &str) -> String {
    format!("Try saying: \"{hint}\"")
}

/// Map a uniform roll in `[0, 1)` onto a hint. Out-of-range rolls clamp.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn hint_for_roll(roll: f64) -> &'static str {
    let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
    let index = ((roll * VOICE_HINTS.len() as f64).floor() as usize).min(VOICE_HINTS.len() - 1);
    VOICE_HINTS[index]
}

/// Banner text for a uniformly random hint.
pub fn random_suggestion() -> String {
    #[cfg(feature = "hydrate")]
    let roll = js_sys::Math::random();
    #[cfg(not(feature = "hydrate"))]
    let roll = 0.0;
    suggestion_text(hint_for_roll(roll))
}
