//! Renderer-independent scene logic: model, connectivity, projection,
//! highlighting and the simulation handle.

mod connectivity;
mod interaction;
mod model;
mod projector;
mod scene;
mod simulation;

pub use interaction::{Highlight, LabelStyle, LineStyle};
pub use model::Model;
pub use projector::{Frame, FrameDiff, Inset, LineGeom};
pub use scene::Scene;
pub use simulation::ForceConfig;
