//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod canvas_repo;
pub mod frame_repo;
pub mod level_repo;
pub mod location_repo;
pub mod panel_repo;

pub use canvas_repo::CanvasRepo;
pub use frame_repo::FrameRepo;
pub use level_repo::LevelRepo;
pub use location_repo::LocationRepo;
pub use panel_repo::PanelRepo;
