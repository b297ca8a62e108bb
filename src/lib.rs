//! tableau-ngin
//!
//! Prepares and renders a static tableau of textured, lit primitives. The
//! crate sits between a fixed scene description and a stateful graphics
//! device: it owns the textures, resolves material and texture tags, composes
//! one model matrix per object and issues the per-object state changes and
//! draw calls in a deterministic order.
//!
//! High-level modules
//! - `camera`: viewer placement, projection mode and movement speed
//! - `context`: the render context passed to every scene phase
//! - `data_structures`: materials, lights, transforms, placements and textures
//! - `director`: scene lifecycle (setup, render, teardown)
//! - `pipelines`: the named shader interface and buffer-ready uniform blocks
//! - `resources`: image decoding, the texture registry and device backends
//! - `tableau`: the desk scene content
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod director;
pub mod pipelines;
pub mod resources;
pub mod tableau;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;

/// Initialise `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
