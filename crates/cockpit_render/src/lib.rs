//! Cockpit Render
//!
//! Quad and line drawing helpers for instrument overlays. Every GPU buffer
//! created here is accounted in the process-wide GPU memory ledger.

pub mod buffers;
pub mod geometry;

pub use buffers::{LineBuffer, QuadBuffer, QuadIndexBuffer};
pub use geometry::{GeometryError, LineVertex, Vertex2D, Vertex3D};
pub use wgpu;

cockpit_ledger::declare_token!(pub QUADS_VBO, "render_quads");
cockpit_ledger::declare_token!(pub QUADS_IBO, "render_quad_indices");
cockpit_ledger::declare_token!(pub LINES_VBO, "render_lines");
