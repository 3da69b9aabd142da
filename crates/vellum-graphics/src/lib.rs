//! Vellum graphics — a retained-mode 2D scene graph on top of `vellum-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vellum_graphics::prelude::*;
//!
//! let scene = GraphicsGroup::new();
//! let card = GraphicsGroup::at(20.0, 20.0);
//! card.add(Arc::new(Rectangle::new(0.0, 0.0, 120.0, 80.0)));
//! card.add_at(Arc::new(Ellipse::circle(0.0, 0.0, 10.0)), 60.0, 40.0);
//! scene.add(card.clone());
//!
//! // Once per frame:
//! scene.draw(&mut surface);
//!
//! // On click, in window coordinates:
//! if let Some(hit) = scene.element_at(mouse.x, mouse.y) { /* ... */ }
//! ```
//!
//! # Change propagation
//!
//! Every drawable owns an [`ObserverSet`]. A group registers itself with each
//! member, so mutating any leaf recomputes the bounds of every enclosing group
//! and notifies the root's observers (typically a window requesting a redraw).

mod error;
mod group;
mod object;
mod observer;

pub mod shapes;

pub use error::{Result, SceneError};
pub use group::{GraphicsGroup, Members};
pub use object::{same_object, GraphicsObject};
pub use observer::{GraphicsObserver, ObserverSet};

/// Everything needed to build and query a scene.
pub mod prelude {
    pub use crate::error::SceneError;
    pub use crate::group::GraphicsGroup;
    pub use crate::object::{same_object, GraphicsObject};
    pub use crate::observer::{GraphicsObserver, ObserverSet};
    pub use crate::shapes::{Ellipse, Rectangle};

    pub use vellum_engine::coords::{Rect, Vec2};
    pub use vellum_engine::paint::{Color, Stroke};
    pub use vellum_engine::surface::{RenderHints, Surface};
}
