pub mod canvas;
pub mod frame;
pub mod frame_kind;
pub mod frame_location;
pub mod frame_wizard;
pub mod level;
pub mod location;
pub mod lookup;
pub mod panel;
