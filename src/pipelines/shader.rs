//! Shader state: the named uniform interface of the object shader and the
//! bridge that pushes resolved scene state through it.

use cgmath::{Matrix4, Point3, Vector2, Vector3, Vector4};

use crate::{
    data_structures::{
        light::{LightSource, MAX_LIGHTS},
        material::Material,
    },
    resources::texture::TextureUnit,
};

/// Uniform names understood by the object shader.
pub mod names {
    pub const MODEL: &str = "model";
    pub const VIEW: &str = "view";
    pub const PROJECTION: &str = "projection";
    pub const VIEW_POSITION: &str = "viewPosition";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const UV_SCALE: &str = "UVscale";

    pub const MATERIAL_AMBIENT_COLOR: &str = "material.ambientColor";
    pub const MATERIAL_AMBIENT_STRENGTH: &str = "material.ambientStrength";
    pub const MATERIAL_DIFFUSE_COLOR: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR_COLOR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    pub const LIGHT_POSITION: &str = "position";
    pub const LIGHT_AMBIENT_COLOR: &str = "ambientColor";
    pub const LIGHT_DIFFUSE_COLOR: &str = "diffuseColor";
    pub const LIGHT_SPECULAR_COLOR: &str = "specularColor";
    pub const LIGHT_FOCAL_STRENGTH: &str = "focalStrength";
    pub const LIGHT_SPECULAR_INTENSITY: &str = "specularIntensity";

    /// `lightSources[index].field`
    pub fn light(index: usize, field: &str) -> String {
        format!("lightSources[{index}].{field}")
    }
}

/// Receiver of named uniform writes, e.g. a linked shader program.
pub trait ShaderSink {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_int(&mut self, name: &str, value: i32);

    fn set_bool(&mut self, name: &str, value: bool) {
        self.set_int(name, value as i32);
    }

    fn set_sampler(&mut self, name: &str, unit: i32) {
        self.set_int(name, unit);
    }
}

/// Pushes scene state into a [`ShaderSink`].
///
/// The bridge holds no state of its own. Without a sink every call is a no-op.
pub struct ShaderBridge<'s> {
    sink: Option<&'s mut dyn ShaderSink>,
}

impl<'s> ShaderBridge<'s> {
    pub fn new(sink: &'s mut dyn ShaderSink) -> Self {
        Self { sink: Some(sink) }
    }

    pub fn unbound() -> Self {
        Self { sink: None }
    }

    pub fn is_bound(&self) -> bool {
        self.sink.is_some()
    }

    pub fn set_model_matrix(&mut self, model: Matrix4<f32>) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.set_mat4(names::MODEL, model);
        }
    }

    /// Draw with a flat color instead of a texture.
    pub fn set_solid_color(&mut self, r: f32, g: f32, b: f32, a: f32) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.set_bool(names::USE_TEXTURE, false);
            sink.set_vec4(names::OBJECT_COLOR, Vector4::new(r, g, b, a));
        }
    }

    /// Sample the texture bound to `unit`.
    pub fn set_texture(&mut self, unit: TextureUnit) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.set_bool(names::USE_TEXTURE, true);
            sink.set_sampler(names::OBJECT_TEXTURE, unit.0 as i32);
        }
    }

    pub fn set_uv_scale(&mut self, u: f32, v: f32) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.set_vec2(names::UV_SCALE, Vector2::new(u, v));
        }
    }

    pub fn set_material(&mut self, material: &Material) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.set_vec3(names::MATERIAL_AMBIENT_COLOR, material.ambient_color);
            sink.set_float(names::MATERIAL_AMBIENT_STRENGTH, material.ambient_strength);
            sink.set_vec3(names::MATERIAL_DIFFUSE_COLOR, material.diffuse_color);
            sink.set_vec3(names::MATERIAL_SPECULAR_COLOR, material.specular_color);
            sink.set_float(names::MATERIAL_SHININESS, material.shininess);
        }
    }

    pub fn set_light(&mut self, index: usize, light: &LightSource) {
        if index >= MAX_LIGHTS {
            log::error!("Light slot {index} does not exist, the shader has {MAX_LIGHTS}");
            return;
        }
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.set_vec3(&names::light(index, names::LIGHT_POSITION), light.position);
            sink.set_vec3(&names::light(index, names::LIGHT_AMBIENT_COLOR), light.ambient_color);
            sink.set_vec3(&names::light(index, names::LIGHT_DIFFUSE_COLOR), light.diffuse_color);
            sink.set_vec3(&names::light(index, names::LIGHT_SPECULAR_COLOR), light.specular_color);
            sink.set_float(&names::light(index, names::LIGHT_FOCAL_STRENGTH), light.focal_strength);
            sink.set_float(
                &names::light(index, names::LIGHT_SPECULAR_INTENSITY),
                light.specular_intensity,
            );
        }
    }

    /// Switch between the lit shading path and the shader's default lighting.
    pub fn set_lighting_enabled(&mut self, enabled: bool) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.set_bool(names::USE_LIGHTING, enabled);
        }
    }

    pub fn set_view(&mut self, view: Matrix4<f32>, projection: Matrix4<f32>, eye: Point3<f32>) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.set_mat4(names::VIEW, view);
            sink.set_mat4(names::PROJECTION, projection);
            sink.set_vec3(names::VIEW_POSITION, Vector3::new(eye.x, eye.y, eye.z));
        }
    }
}
