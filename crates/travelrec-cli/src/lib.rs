//! travelrec-cli
//! =============
//!
//! Command-line interface for the `travelrec-core` recommendation dataset.
//!
//! This crate primarily provides a binary (`travelrec`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview.
//!
//! Basic usage:
//!
//! ```text
//! travelrec --help
//! travelrec stats
//! travelrec search beach
//! travelrec --html search country
//! ```
//!
//! For programmatic access to the data structures and APIs, use the
//! `travelrec-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
