use crate::{
    pipelines::shader::{ShaderBridge, ShaderSink},
    resources::mesh::MeshLibrary,
};

/// The device state a scene phase is allowed to touch: the shader it writes
/// uniforms into and the meshes it draws with.
///
/// A context is built per phase call and passed in explicitly, so several
/// scenes or test doubles can exist side by side.
pub struct RenderContext<'a> {
    pub shader: ShaderBridge<'a>,
    pub meshes: &'a mut dyn MeshLibrary,
}

impl<'a> RenderContext<'a> {
    pub fn new(sink: &'a mut dyn ShaderSink, meshes: &'a mut dyn MeshLibrary) -> Self {
        Self {
            shader: ShaderBridge::new(sink),
            meshes,
        }
    }

    /// A context whose uniform writes go nowhere, e.g. before a shader is linked.
    pub fn without_shader(meshes: &'a mut dyn MeshLibrary) -> Self {
        Self {
            shader: ShaderBridge::unbound(),
            meshes,
        }
    }
}
