//! Domain types shared by the data-access and HTTP layers.
//!
//! Nothing in this crate performs I/O. It holds the closed set of frame
//! kinds, the creation-wizard state machine and its short-lived store, and
//! return-to navigation.

pub mod error;
pub mod frame_kind;
pub mod navigation;
pub mod types;
pub mod wizard;
