//! Completion metrics over the slide template.

use serde::Serialize;

use crate::vsl::taxonomy::TOTAL_SLIDES;

/// Whole-percent completion of `saved` slides out of `total`, rounded to
/// the nearest integer and clamped to 0..=100. A zero total reports zero.
pub fn percentage_of(saved: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (saved as f64 * 100.0 / total as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Completion percent against the full template.
pub fn percentage(saved: usize) -> u8 {
    percentage_of(saved, TOTAL_SLIDES as usize)
}

/// Snapshot of how far along a project is, as shown in the tracker and
/// pushed to connected clients after every save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub saved_slides: usize,
    pub total_slides: usize,
    pub progress: u8,
}

impl ProgressSummary {
    pub fn from_saved(saved: usize) -> ProgressSummary {
        ProgressSummary {
            saved_slides: saved,
            total_slides: TOTAL_SLIDES as usize,
            progress: percentage(saved),
        }
    }
}
