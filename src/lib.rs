//! travelrec-rs — workspace facade over `travelrec-core`.
//!
//! This crate re-exports the core API so the demos under `demos/` can use a
//! single import. For applications, depend on `travelrec-core` directly.

pub use travelrec_core::prelude;
pub use travelrec_core::*;
