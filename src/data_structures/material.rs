//! Surface materials and the catalog they are resolved from.
//!
//! A [`Material`] bundles the lighting response of a surface: the colors used
//! for the ambient, diffuse and specular terms plus the ambient strength and
//! the specular shininess exponent, under the tag placements refer to it by.
//! Materials are registered once while the scene is set up and looked up by
//! tag for every drawn object.

use cgmath::Vector3;
use thiserror::Error;

use crate::data_structures::tagged::{DuplicatePolicy, DuplicateTag, TaggedStore};

#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub tag: String,
    pub ambient_color: Vector3<f32>,
    pub ambient_strength: f32,
    pub diffuse_color: Vector3<f32>,
    pub specular_color: Vector3<f32>,
    pub shininess: f32,
}

impl Material {
    pub fn new(
        tag: &str,
        ambient_color: [f32; 3],
        ambient_strength: f32,
        diffuse_color: [f32; 3],
        specular_color: [f32; 3],
        shininess: f32,
    ) -> Self {
        Self {
            tag: tag.to_string(),
            ambient_color: ambient_color.into(),
            ambient_strength,
            diffuse_color: diffuse_color.into(),
            specular_color: specular_color.into(),
            shininess,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MaterialError {
    #[error("no materials have been registered")]
    EmptyCatalog,
    #[error("no material is registered under '{0}'")]
    NotFound(String),
    #[error(transparent)]
    Duplicate(#[from] DuplicateTag),
}

/// Named materials, resolved by tag.
///
/// Resolution either hands out a full copy of a registered material or fails;
/// an empty catalog and an unknown tag are reported as distinct errors.
#[derive(Clone, Debug, Default)]
pub struct MaterialCatalog {
    materials: TaggedStore<Material>,
}

impl MaterialCatalog {
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            materials: TaggedStore::new(policy),
        }
    }

    pub fn add(&mut self, material: Material) -> Result<(), MaterialError> {
        let tag = material.tag.clone();
        self.materials.insert(&tag, material)?;
        Ok(())
    }

    pub fn resolve(&self, tag: &str) -> Result<Material, MaterialError> {
        if self.materials.is_empty() {
            return Err(MaterialError::EmptyCatalog);
        }
        self.materials
            .get(tag)
            .cloned()
            .ok_or_else(|| MaterialError::NotFound(tag.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Material)> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
