//! Pure domain core for the fixed-structure VSL script template.
//!
//! Nothing in here touches the database or the web layer. The template
//! itself (steps, sections, slides, phrase options) is compiled in and
//! identical for every project.

pub mod progress;
pub mod slide;
pub mod taxonomy;
