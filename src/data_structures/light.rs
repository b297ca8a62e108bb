use cgmath::Vector3;

/// Number of light slots the lit shading path exposes.
pub const MAX_LIGHTS: usize = 4;

/// A point light as consumed by the lit shading path.
///
/// `focal_strength` is the specular exponent applied to this light's highlight,
/// `specular_intensity` scales the highlight itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightSource {
    pub position: Vector3<f32>,
    pub ambient_color: Vector3<f32>,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub focal_strength: f32,
    pub specular_intensity: f32,
}

impl LightSource {
    pub fn new(
        position: [f32; 3],
        ambient_color: [f32; 3],
        diffuse_color: [f32; 3],
        specular_color: [f32; 3],
        focal_strength: f32,
        specular_intensity: f32,
    ) -> Self {
        Self {
            position: position.into(),
            ambient_color: ambient_color.into(),
            diffuse_color: diffuse_color.into(),
            specular_color: specular_color.into(),
            focal_strength,
            specular_intensity,
        }
    }
}
