//! The object shader's uniform interface.
//!
//! - `shader` holds the uniform names, the `ShaderSink` trait and the bridge
//! - `uniform` packs uniform writes into buffer-ready structs
//! - `light` contains the light layout and uniform buffer helpers

pub mod light;
pub mod shader;
pub mod uniform;
