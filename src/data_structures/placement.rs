//! Scene content: where each primitive goes and how it is shaded.

use std::path::PathBuf;

use cgmath::{Vector2, Vector3, Vector4};

use crate::{
    data_structures::{light::LightSource, material::Material, transform::Transform},
    resources::mesh::MeshKind,
};

/// One drawn object of the tableau.
///
/// `texture` takes precedence over `color`. Leaving both (or `uv_scale`, or
/// `material`) unset keeps whatever the previous object pushed; nothing is
/// reset between objects.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectPlacement {
    pub label: String,
    pub transform: Transform,
    pub mesh: MeshKind,
    pub texture: Option<String>,
    pub color: Option<Vector4<f32>>,
    pub uv_scale: Option<Vector2<f32>>,
    pub material: Option<String>,
}

impl ObjectPlacement {
    pub fn new(label: &str, mesh: MeshKind) -> Self {
        Self {
            label: label.to_string(),
            transform: Transform::new(),
            mesh,
            texture: None,
            color: None,
            uv_scale: None,
            material: None,
        }
    }

    pub fn scale(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.scale = Vector3::new(x, y, z);
        self
    }

    /// Rotation about the X, Y and Z axes in degrees.
    pub fn rotation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.rotation = Vector3::new(x, y, z);
        self
    }

    pub fn position(mut self, x: f32, y: f32, z: f32) -> Self {
        self.transform.position = Vector3::new(x, y, z);
        self
    }

    pub fn texture(mut self, tag: &str) -> Self {
        self.texture = Some(tag.to_string());
        self
    }

    pub fn color(mut self, r: f32, g: f32, b: f32, a: f32) -> Self {
        self.color = Some(Vector4::new(r, g, b, a));
        self
    }

    pub fn uv_scale(mut self, u: f32, v: f32) -> Self {
        self.uv_scale = Some(Vector2::new(u, v));
        self
    }

    pub fn material(mut self, tag: &str) -> Self {
        self.material = Some(tag.to_string());
        self
    }
}

/// A named run of placements, e.g. "pencil" or "dice".
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementGroup {
    pub name: String,
    pub placements: Vec<ObjectPlacement>,
}

/// An image file to upload and the tag it is looked up by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureSource {
    pub path: PathBuf,
    pub tag: String,
}

impl TextureSource {
    pub fn new(path: impl Into<PathBuf>, tag: &str) -> Self {
        Self {
            path: path.into(),
            tag: tag.to_string(),
        }
    }
}

/// Everything the director needs to set up and draw a scene.
///
/// Textures are loaded in list order, so their order fixes unit assignment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneConfig {
    pub textures: Vec<TextureSource>,
    pub materials: Vec<Material>,
    pub lights: Vec<LightSource>,
    pub groups: Vec<PlacementGroup>,
}

impl SceneConfig {
    pub fn placements(&self) -> impl Iterator<Item = &ObjectPlacement> {
        self.groups.iter().flat_map(|group| group.placements.iter())
    }

    /// Mesh kinds used by the placements, each once, in order of first use.
    pub fn mesh_kinds(&self) -> Vec<MeshKind> {
        let mut kinds = Vec::new();
        for placement in self.placements() {
            if !kinds.contains(&placement.mesh) {
                kinds.push(placement.mesh);
            }
        }
        kinds
    }
}
