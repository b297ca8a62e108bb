//! CPU-side uniform blocks for the object shader.
//!
//! [`UniformBlock`] implements [`ShaderSink`] by writing every named uniform
//! into a `#[repr(C)]` struct that can be copied into a WGPU uniform buffer
//! as-is. Per-draw state lives in [`ObjectUniform`], per-frame state in
//! [`CameraUniform`] and [`LightingUniform`].

use cgmath::{Matrix4, SquareMatrix, Vector2, Vector3, Vector4};

use crate::{
    data_structures::light::MAX_LIGHTS,
    pipelines::{
        light::LightingUniform,
        shader::{ShaderSink, names},
    },
};

/// Converts OpenGL clip space (z in -1..1) to the WGPU one (z in 0..1).
#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    pub ambient_color: [f32; 3],
    pub ambient_strength: f32,
    pub diffuse_color: [f32; 3],
    _padding: u32,
    pub specular_color: [f32; 3],
    pub shininess: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    pub object_color: [f32; 4],
    pub uv_scale: [f32; 2],
    pub use_texture: u32,
    pub texture_unit: i32,
    pub material: MaterialUniform,
}

impl Default for ObjectUniform {
    fn default() -> Self {
        Self {
            model: Matrix4::identity().into(),
            object_color: [1.0, 1.0, 1.0, 1.0],
            uv_scale: [1.0, 1.0],
            use_texture: 0,
            texture_unit: 0,
            material: bytemuck::Zeroable::zeroed(),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub view_position: [f32; 3],
    _padding: u32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view: Matrix4::identity().into(),
            projection: Matrix4::identity().into(),
            view_position: [0.0; 3],
            _padding: 0,
        }
    }
}

/// Packs named uniform writes into buffer-ready structs.
///
/// Projections arrive in OpenGL clip-space convention and are stored
/// converted for WGPU. Writes to names the object shader does not declare
/// are logged and dropped.
#[derive(Debug, Default, Clone)]
pub struct UniformBlock {
    pub object: ObjectUniform,
    pub camera: CameraUniform,
    pub lighting: LightingUniform,
}

impl UniformBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.object)
    }

    pub fn camera_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.camera)
    }

    pub fn lighting_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(&self.lighting)
    }

    fn unknown(&self, name: &str) {
        log::warn!("Uniform '{name}' is not part of the object shader");
    }

    /// Split `lightSources[i].field` into its slot and field name.
    fn light_field(name: &str) -> Option<(usize, &str)> {
        let rest = name.strip_prefix("lightSources[")?;
        let (index, field) = rest.split_once("].")?;
        let index = index.parse::<usize>().ok()?;
        (index < MAX_LIGHTS).then_some((index, field))
    }
}

impl ShaderSink for UniformBlock {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        match name {
            names::MODEL => self.object.model = value.into(),
            names::VIEW => self.camera.view = value.into(),
            names::PROJECTION => self.camera.projection = (OPENGL_TO_WGPU_MATRIX * value).into(),
            _ => self.unknown(name),
        }
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        match name {
            names::OBJECT_COLOR => self.object.object_color = value.into(),
            _ => self.unknown(name),
        }
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        let value: [f32; 3] = value.into();
        match name {
            names::VIEW_POSITION => self.camera.view_position = value,
            names::MATERIAL_AMBIENT_COLOR => self.object.material.ambient_color = value,
            names::MATERIAL_DIFFUSE_COLOR => self.object.material.diffuse_color = value,
            names::MATERIAL_SPECULAR_COLOR => self.object.material.specular_color = value,
            _ => match Self::light_field(name) {
                Some((i, names::LIGHT_POSITION)) => self.lighting.lights[i].position = value,
                Some((i, names::LIGHT_AMBIENT_COLOR)) => {
                    self.lighting.lights[i].ambient_color = value
                }
                Some((i, names::LIGHT_DIFFUSE_COLOR)) => {
                    self.lighting.lights[i].diffuse_color = value
                }
                Some((i, names::LIGHT_SPECULAR_COLOR)) => {
                    self.lighting.lights[i].specular_color = value
                }
                _ => self.unknown(name),
            },
        }
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        match name {
            names::UV_SCALE => self.object.uv_scale = value.into(),
            _ => self.unknown(name),
        }
    }

    fn set_float(&mut self, name: &str, value: f32) {
        match name {
            names::MATERIAL_AMBIENT_STRENGTH => self.object.material.ambient_strength = value,
            names::MATERIAL_SHININESS => self.object.material.shininess = value,
            _ => match Self::light_field(name) {
                Some((i, names::LIGHT_FOCAL_STRENGTH)) => {
                    self.lighting.lights[i].focal_strength = value
                }
                Some((i, names::LIGHT_SPECULAR_INTENSITY)) => {
                    self.lighting.lights[i].specular_intensity = value
                }
                _ => self.unknown(name),
            },
        }
    }

    fn set_int(&mut self, name: &str, value: i32) {
        match name {
            names::USE_TEXTURE => self.object.use_texture = (value != 0) as u32,
            names::USE_LIGHTING => self.lighting.use_lighting = (value != 0) as u32,
            names::OBJECT_TEXTURE => self.object.texture_unit = value,
            _ => self.unknown(name),
        }
    }
}
