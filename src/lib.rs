//! Glicko and Glicko-2 rating updates for head-to-head competitions.
//!
//! Both systems implement [`systems::RatingSystem`]: one rating-period
//! update per player, given pre-period snapshots of its opponents.

pub mod numerical;
pub mod system_config;
pub mod systems;
