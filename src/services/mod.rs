//! Service layer: period classification, next-event projection, and the
//! formatting conventions shared between them.
//!
//! Everything here is a pure function of its inputs; the file and network
//! adapters live in [`crate::store`] and [`crate::hebcal`], and the
//! [`snapshot`] module wires them together per request.

pub mod classifier;
pub mod format;
pub mod projector;
pub mod snapshot;


pub use classifier::{classify, Enrichment, PeriodSnapshot};
pub use projector::{next_event, NextEvent, Projection};
