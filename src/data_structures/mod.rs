//! Engine data structures: materials, lights, transforms, placements and textures.
//!
//! - `light` holds point light parameters for the lit shading path
//! - `material` contains surface materials and the catalog they are resolved from
//! - `placement` describes scene content (placed objects, texture sources, groups)
//! - `tagged` is the ordered tag-keyed store behind textures and materials
//! - `texture` contains decoded images and the GPU texture wrapper
//! - `transform` composes model matrices

pub mod light;
pub mod material;
pub mod placement;
pub mod tagged;
pub mod texture;
pub mod transform;
