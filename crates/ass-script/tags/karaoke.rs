//! Karaoke timing: `\k`, `\K`, `\kf`, `\ko`
//!
//! Durations are written in centiseconds and stored in seconds.

use super::grammar::{decimal, Matcher, ValueTag};
use super::{Part, TagHandler};

/// Centiseconds to seconds
fn centiseconds(input: &str) -> Option<(f64, usize)> {
    decimal(input).map(|(value, consumed)| (value / 100.0, consumed))
}

const DURATION: &[Matcher<f64>] = &[centiseconds];

/// Create the karaoke handlers
#[must_use]
pub fn create_karaoke_handlers() -> Vec<Box<dyn TagHandler>> {
    vec![
        Box::new(ValueTag::required("k", DURATION, Part::ColorKaraoke)),
        Box::new(ValueTag::required("K", DURATION, Part::SweepingColorKaraoke)),
        Box::new(ValueTag::required("kf", DURATION, Part::SweepingColorKaraoke)),
        Box::new(ValueTag::required("ko", DURATION, Part::OutlineKaraoke)),
    ]
}
