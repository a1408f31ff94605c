//! Slide identity and ordering within the script template.

use std::fmt;
use std::str::FromStr;

use crate::vsl::taxonomy::{SECTIONS_PER_STEP, SLIDES_PER_SECTION, SLIDES_PER_STEP, STEPS};

/// Rejection reason for a string that does not name a slide in the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideIdError {
    /// Not of the form `slide-{step}-{section}-{slide}`.
    Malformed(String),
    /// Well-formed, but the coordinates fall outside the template grid.
    OutOfBounds(String),
}

impl fmt::Display for SlideIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlideIdError::Malformed(s) => write!(f, "malformed slide identifier: {s:?}"),
            SlideIdError::OutOfBounds(s) => write!(f, "slide identifier out of range: {s:?}"),
        }
    }
}

impl std::error::Error for SlideIdError {}

/// A validated (step, section, slide) coordinate, all 1-based.
///
/// Construction goes through [`SlideId::new`] or [`str::parse`], so a value
/// of this type always names a real slide. The canonical text form is
/// `slide-{step}-{section}-{slide}` with no leading zeros.
///
/// `Ord` follows reading order: step first, then section, then slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId {
    step: u8,
    section: u8,
    slide: u8,
}

impl SlideId {
    /// The opening slide of the script.
    pub const FIRST: SlideId = SlideId { step: 1, section: 1, slide: 1 };

    /// The closing slide of the script.
    pub const LAST: SlideId = SlideId {
        step: STEPS,
        section: SECTIONS_PER_STEP,
        slide: SLIDES_PER_SECTION,
    };

    pub fn new(step: u8, section: u8, slide: u8) -> Result<SlideId, SlideIdError> {
        let in_range = (1..=STEPS).contains(&step)
            && (1..=SECTIONS_PER_STEP).contains(&section)
            && (1..=SLIDES_PER_SECTION).contains(&slide);
        if !in_range {
            return Err(SlideIdError::OutOfBounds(format!(
                "slide-{step}-{section}-{slide}"
            )));
        }
        Ok(SlideId { step, section, slide })
    }

    /// Crate-internal constructor for callers that already hold in-range
    /// coordinates, such as the outline builder iterating the template.
    pub(crate) const fn from_parts(step: u8, section: u8, slide: u8) -> SlideId {
        debug_assert!(step >= 1 && step <= STEPS);
        debug_assert!(section >= 1 && section <= SECTIONS_PER_STEP);
        debug_assert!(slide >= 1 && slide <= SLIDES_PER_SECTION);
        SlideId { step, section, slide }
    }

    pub const fn step(self) -> u8 {
        self.step
    }

    pub const fn section(self) -> u8 {
        self.section
    }

    pub const fn slide(self) -> u8 {
        self.slide
    }

    /// 1-based position in reading order, from 1 up to the template size.
    pub const fn position(self) -> usize {
        (self.step as usize - 1) * SLIDES_PER_STEP as usize
            + (self.section as usize - 1) * SLIDES_PER_SECTION as usize
            + self.slide as usize
    }

    /// The next slide in reading order, or `None` past the last slide.
    ///
    /// Exhausted slides roll over to the next section, exhausted sections
    /// to the first section of the next step.
    pub fn forward(self) -> Option<SlideId> {
        if self.slide < SLIDES_PER_SECTION {
            Some(SlideId { slide: self.slide + 1, ..self })
        } else if self.section < SECTIONS_PER_STEP {
            Some(SlideId {
                step: self.step,
                section: self.section + 1,
                slide: 1,
            })
        } else if self.step < STEPS {
            Some(SlideId {
                step: self.step + 1,
                section: 1,
                slide: 1,
            })
        } else {
            None
        }
    }

    /// The previous slide in reading order, or `None` before the first slide.
    pub fn backward(self) -> Option<SlideId> {
        if self.slide > 1 {
            Some(SlideId { slide: self.slide - 1, ..self })
        } else if self.section > 1 {
            Some(SlideId {
                step: self.step,
                section: self.section - 1,
                slide: SLIDES_PER_SECTION,
            })
        } else if self.step > 1 {
            Some(SlideId {
                step: self.step - 1,
                section: SECTIONS_PER_STEP,
                slide: SLIDES_PER_SECTION,
            })
        } else {
            None
        }
    }

    /// Every slide in the template, in reading order.
    pub fn all() -> impl Iterator<Item = SlideId> {
        std::iter::successors(Some(SlideId::FIRST), |id| id.forward())
    }

    /// Composite key recording this slide as saved within a project.
    pub fn saved_key(self, project_id: i64) -> String {
        format!("{project_id}_{self}")
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide-{}-{}-{}", self.step, self.section, self.slide)
    }
}

impl FromStr for SlideId {
    type Err = SlideIdError;

    fn from_str(s: &str) -> Result<SlideId, SlideIdError> {
        let rest = s
            .strip_prefix("slide-")
            .ok_or_else(|| SlideIdError::Malformed(s.to_string()))?;
        let parts: Vec<&str> = rest.split('-').collect();
        if parts.len() != 3 {
            return Err(SlideIdError::Malformed(s.to_string()));
        }
        let mut nums = [0u32; 3];
        for (slot, part) in nums.iter_mut().zip(&parts) {
            let canonical = !part.is_empty()
                && !part.starts_with('0')
                && part.bytes().all(|b| b.is_ascii_digit());
            if !canonical {
                return Err(SlideIdError::Malformed(s.to_string()));
            }
            *slot = part
                .parse()
                .map_err(|_| SlideIdError::Malformed(s.to_string()))?;
        }
        let [step, section, slide] = nums;
        let in_range = (1..=u32::from(STEPS)).contains(&step)
            && (1..=u32::from(SECTIONS_PER_STEP)).contains(&section)
            && (1..=u32::from(SLIDES_PER_SECTION)).contains(&slide);
        if !in_range {
            return Err(SlideIdError::OutOfBounds(s.to_string()));
        }
        Ok(SlideId {
            step: step as u8,
            section: section as u8,
            slide: slide as u8,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vsl::taxonomy::TOTAL_SLIDES;

    #[test]
    fn round_trip_canonical() {
        for id in SlideId::all() {
            let parsed: SlideId = id.to_string().parse().unwrap();
            assert_eq!(parsed, id);
        }
        let id: SlideId = "slide-3-2-1".parse().unwrap();
        assert_eq!((id.step(), id.section(), id.slide()), (3, 2, 1));
        assert_eq!(id.to_string(), "slide-3-2-1");
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in [
            "",
            "slide",
            "slide-",
            "slide-1",
            "slide-1-1",
            "slide-1-1-1-1",
            "slide-1--1",
            "slide-a-1-1",
            "slide-1-1-x",
            "slide-01-1-1",
            "slide-1-1-03",
            "Slide-1-1-1",
            "deck-1-1-1",
            "slide-1-1-1 ",
            "slide-+1-1-1",
        ] {
            assert!(
                matches!(bad.parse::<SlideId>(), Err(SlideIdError::Malformed(_))),
                "expected malformed: {bad:?}"
            );
        }
    }

    #[test]
    fn parse_rejects_out_of_bounds() {
        for bad in [
            "slide-0-1-1",
            "slide-6-1-1",
            "slide-1-0-1",
            "slide-1-3-1",
            "slide-1-1-0",
            "slide-1-1-4",
            "slide-999-1-1",
            "slide-86-42-9",
        ] {
            assert!(
                matches!(bad.parse::<SlideId>(), Err(SlideIdError::OutOfBounds(_))),
                "expected out of range: {bad:?}"
            );
        }
    }

    #[test]
    fn forward_walks_entire_template() {
        let order: Vec<SlideId> = SlideId::all().collect();
        assert_eq!(order.len(), TOTAL_SLIDES as usize);
        assert_eq!(order[0], SlideId::FIRST);
        assert_eq!(*order.last().unwrap(), SlideId::LAST);
        assert_eq!(SlideId::LAST.forward(), None);
    }

    #[test]
    fn backward_inverts_forward() {
        for id in SlideId::all() {
            if let Some(next) = id.forward() {
                assert_eq!(next.backward(), Some(id));
            }
        }
        assert_eq!(SlideId::FIRST.backward(), None);
    }

    #[test]
    fn boundary_transitions() {
        let end_of_section: SlideId = "slide-1-1-3".parse().unwrap();
        assert_eq!(end_of_section.forward().unwrap().to_string(), "slide-1-2-1");

        let end_of_step: SlideId = "slide-1-2-3".parse().unwrap();
        assert_eq!(end_of_step.forward().unwrap().to_string(), "slide-2-1-1");

        let start_of_step: SlideId = "slide-2-1-1".parse().unwrap();
        assert_eq!(start_of_step.backward().unwrap().to_string(), "slide-1-2-3");
    }

    #[test]
    fn positions_are_contiguous() {
        let positions: Vec<usize> = SlideId::all().map(|id| id.position()).collect();
        let expected: Vec<usize> = (1..=TOTAL_SLIDES as usize).collect();
        assert_eq!(positions, expected);
    }

    #[test]
    fn ord_matches_reading_order() {
        let mut shuffled: Vec<SlideId> = SlideId::all().collect();
        shuffled.reverse();
        shuffled.sort();
        assert_eq!(shuffled, SlideId::all().collect::<Vec<_>>());
    }

    #[test]
    fn saved_key_format() {
        let id: SlideId = "slide-2-1-3".parse().unwrap();
        assert_eq!(id.saved_key(42), "42_slide-2-1-3");
    }
}
