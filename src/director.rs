//! Scene lifecycle: setup, per-frame rendering and teardown.
//!
//! A [`SceneDirector`] owns the scene configuration together with the
//! resources resolved from it (textures and materials) and walks through three
//! phases in a fixed order:
//!
//! 1. [`setup`](SceneDirector::setup) runs once. It loads and binds all
//!    textures, fills the material catalog, configures the lights and preloads
//!    every mesh kind the placements use.
//! 2. [`render`](SceneDirector::render) runs once per frame. Every placement is
//!    drawn in list order: model matrix, texture or color, UV scale, material,
//!    then the mesh draw call.
//! 3. [`teardown`](SceneDirector::teardown) releases the textures.
//!
//! Rendering never aborts on a single object. A tag that does not resolve is
//! logged and the object is drawn with whatever state the previous one left
//! bound.

use std::fmt;

use thiserror::Error;

use crate::{
    context::RenderContext,
    data_structures::{
        light::MAX_LIGHTS,
        material::MaterialCatalog,
        placement::{ObjectPlacement, SceneConfig},
        tagged::DuplicatePolicy,
    },
    resources::{
        ImageDecoder,
        texture::{DEFAULT_TEXTURE_UNITS, TextureDevice, TextureRegistry},
    },
};

/// Knobs that are not scene content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneSettings {
    /// Texture units available on the device.
    pub max_texture_units: usize,
    /// Applies to texture and material tags alike.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            max_texture_units: DEFAULT_TEXTURE_UNITS,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ready,
    Released,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Idle => "not set up",
            Phase::Ready => "set up",
            Phase::Released => "released",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectorError {
    #[error("cannot {action}: the scene is {phase}")]
    OutOfOrder { action: &'static str, phase: Phase },
    #[error("{count} lights are configured but the shader has only {max} slots", max = MAX_LIGHTS)]
    TooManyLights { count: usize },
}

/// What setup managed to prepare. Failed items were logged when they failed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupReport {
    pub textures_loaded: usize,
    pub failed_textures: Vec<String>,
    pub materials: usize,
    pub rejected_materials: Vec<String>,
    pub lights: usize,
    pub meshes: usize,
}

impl SetupReport {
    pub fn is_complete(&self) -> bool {
        self.failed_textures.is_empty() && self.rejected_materials.is_empty()
    }
}

#[derive(Debug)]
pub struct SceneDirector<H> {
    config: SceneConfig,
    textures: TextureRegistry<H>,
    materials: MaterialCatalog,
    phase: Phase,
}

impl<H: Clone + fmt::Debug> SceneDirector<H> {
    pub fn new(config: SceneConfig, settings: SceneSettings) -> Self {
        Self {
            config,
            textures: TextureRegistry::new(
                settings.max_texture_units,
                settings.duplicate_policy,
            ),
            materials: MaterialCatalog::new(settings.duplicate_policy),
            phase: Phase::Idle,
        }
    }

    pub fn setup<D, I>(
        &mut self,
        device: &mut D,
        decoder: &I,
        ctx: &mut RenderContext<'_>,
    ) -> anyhow::Result<SetupReport>
    where
        D: TextureDevice<Handle = H>,
        I: ImageDecoder + ?Sized,
    {
        self.expect_phase(Phase::Idle, "set up the scene")?;
        if self.config.lights.len() > MAX_LIGHTS {
            return Err(DirectorError::TooManyLights {
                count: self.config.lights.len(),
            }
            .into());
        }
        let mut report = SetupReport::default();

        for source in &self.config.textures {
            match self.textures.load(device, decoder, &source.path, &source.tag) {
                Ok(_) => report.textures_loaded += 1,
                Err(_) => report.failed_textures.push(source.tag.clone()),
            }
        }
        self.textures.bind_all(device);

        for material in &self.config.materials {
            match self.materials.add(material.clone()) {
                Ok(()) => report.materials += 1,
                Err(e) => {
                    log::error!("Material '{}' was not added: {e}", material.tag);
                    report.rejected_materials.push(material.tag.clone());
                }
            }
        }

        ctx.shader.set_lighting_enabled(true);
        for (index, light) in self.config.lights.iter().enumerate() {
            ctx.shader.set_light(index, light);
        }
        report.lights = self.config.lights.len();

        // one upload per kind, no matter how many placements draw it
        for kind in self.config.mesh_kinds() {
            ctx.meshes.load(kind);
            report.meshes += 1;
        }

        self.phase = Phase::Ready;
        log::info!(
            "Scene ready: {} textures ({} failed), {} materials, {} lights, {} meshes",
            report.textures_loaded,
            report.failed_textures.len(),
            report.materials,
            report.lights,
            report.meshes
        );
        Ok(report)
    }

    /// Draw every placement once, in configuration order.
    pub fn render(&self, ctx: &mut RenderContext<'_>) -> Result<(), DirectorError> {
        self.expect_phase(Phase::Ready, "render")?;
        for placement in self.config.placements() {
            self.draw(placement, ctx);
        }
        Ok(())
    }

    pub fn teardown<D: TextureDevice<Handle = H>>(
        &mut self,
        device: &mut D,
    ) -> Result<(), DirectorError> {
        self.expect_phase(Phase::Ready, "tear down the scene")?;
        self.textures.release_all(device);
        self.phase = Phase::Released;
        Ok(())
    }

    fn draw(&self, placement: &ObjectPlacement, ctx: &mut RenderContext<'_>) {
        ctx.shader.set_model_matrix(placement.transform.to_matrix());

        let unit = placement.texture.as_deref().and_then(|tag| {
            let unit = self.textures.find_unit(tag);
            if unit.is_none() {
                log::warn!("'{}': texture '{tag}' is not loaded", placement.label);
            }
            unit
        });
        match (unit, placement.color) {
            (Some(unit), _) => ctx.shader.set_texture(unit),
            (None, Some(c)) => ctx.shader.set_solid_color(c.x, c.y, c.z, c.w),
            (None, None) => (),
        }
        if let Some(uv) = placement.uv_scale {
            ctx.shader.set_uv_scale(uv.x, uv.y);
        }

        if let Some(tag) = placement.material.as_deref() {
            match self.materials.resolve(tag) {
                Ok(material) => ctx.shader.set_material(&material),
                Err(e) => log::warn!("'{}': {e}", placement.label),
            }
        }

        log::debug!("Drawing '{}' as {}", placement.label, placement.mesh);
        ctx.meshes.draw(placement.mesh);
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), DirectorError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(DirectorError::OutOfOrder {
                action,
                phase: self.phase,
            })
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn textures(&self) -> &TextureRegistry<H> {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialCatalog {
        &self.materials
    }
}
