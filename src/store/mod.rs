//! File-backed adapters for the three cross-process JSON files.
//!
//! Each file is written by a separate process (the external zmanim
//! provider, the Mincha scraper, the parasha updater) and read fresh on
//! every query. A file observed mid-write parses as "absent", never as a
//! fatal error.

pub mod mincha;
pub mod parasha;
pub mod zmanim;

pub use mincha::{MinchaOverride, MinchaOverrideStore};
pub use parasha::{WeeklyReading, WeeklyReadingStore};
pub use zmanim::ZmanimStore;
