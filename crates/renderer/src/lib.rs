//! Layout and drawing engine for the bar.
//!
//! - [`geometry`]: the box model (outline, border, padding, content) and fill
//! - [`layout`]: label placement and the window growth it needs
//! - [`plan`]: the ordered draw commands of one frame
//! - [`coordinator`]: one update from raw line to draw plan
//!
//! Nothing here touches a display server; see [`Surface`].

pub mod coordinator;
pub mod geometry;
pub mod label;
pub mod layout;
pub mod plan;
pub mod surface;

pub use coordinator::{Coordinator, UpdateReport};
pub use geometry::{BoxModel, BoxStyle, Fill, Layers, Rect, Ring};
pub use label::Label;
pub use layout::{layout, CanvasBounds};
pub use plan::{DrawCommand, DrawPlan, WindowBounds};
pub use surface::{Surface, TextExtent};
