//! Recording surface.
//!
//! Responsibilities:
//! - implement [`Surface`](crate::surface::Surface) without any backend
//! - store draw commands in call order with the origin already applied
//! - remember the hints that were active for each command
//!
//! Useful as a headless backend and as a test double.

mod cmd;
mod list;

pub use cmd::{DrawCmd, EllipseCmd, RectCmd};
pub use list::{DrawItem, DrawList};
