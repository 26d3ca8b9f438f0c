//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - Joined or projected read models where a view needs them

pub mod canvas;
pub mod frame;
pub mod level;
pub mod location;
pub mod option;
pub mod panel;
