#![allow(dead_code)]

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tableau_ngin::{
    Matrix4, Vector2, Vector3, Vector4,
    data_structures::texture::{DecodedImage, PixelFormat},
    pipelines::shader::ShaderSink,
    resources::{
        ImageDecoder,
        mesh::{MeshKind, MeshLibrary},
        texture::{TextureDevice, TextureUnit},
    },
};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A single uniform write as seen by the shader.
#[derive(Clone, Debug, PartialEq)]
pub enum UniformWrite {
    Mat4(String, [[f32; 4]; 4]),
    Vec4(String, [f32; 4]),
    Vec3(String, [f32; 3]),
    Vec2(String, [f32; 2]),
    Float(String, f32),
    Int(String, i32),
}

impl UniformWrite {
    pub fn name(&self) -> &str {
        match self {
            UniformWrite::Mat4(name, _)
            | UniformWrite::Vec4(name, _)
            | UniformWrite::Vec3(name, _)
            | UniformWrite::Vec2(name, _)
            | UniformWrite::Float(name, _)
            | UniformWrite::Int(name, _) => name,
        }
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub writes: Vec<UniformWrite>,
}

impl RecordingSink {
    pub fn names(&self) -> Vec<&str> {
        self.writes.iter().map(|w| w.name()).collect()
    }

    pub fn ints(&self, name: &str) -> Vec<i32> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                UniformWrite::Int(n, v) if n == name => Some(*v),
                _ => None,
            })
            .collect()
    }
}

impl ShaderSink for RecordingSink {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.writes.push(UniformWrite::Mat4(name.to_string(), value.into()));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.writes.push(UniformWrite::Vec4(name.to_string(), value.into()));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.writes.push(UniformWrite::Vec3(name.to_string(), value.into()));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.writes.push(UniformWrite::Vec2(name.to_string(), value.into()));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.writes.push(UniformWrite::Float(name.to_string(), value));
    }

    fn set_int(&mut self, name: &str, value: i32) {
        self.writes.push(UniformWrite::Int(name.to_string(), value));
    }
}

#[derive(Default)]
pub struct RecordingMeshes {
    pub loaded: Vec<MeshKind>,
    pub drawn: Vec<MeshKind>,
}

impl MeshLibrary for RecordingMeshes {
    fn load(&mut self, kind: MeshKind) {
        self.loaded.push(kind);
    }

    fn draw(&mut self, kind: MeshKind) {
        self.drawn.push(kind);
    }
}

/// Texture device that hands out increasing ids and remembers what happened to them.
#[derive(Default)]
pub struct FakeDevice {
    pub next_id: u32,
    pub created: Vec<(String, PixelFormat)>,
    pub bound: HashMap<TextureUnit, u32>,
    pub released: Vec<u32>,
    pub refuse_creation: bool,
}

impl TextureDevice for FakeDevice {
    type Handle = u32;

    fn create_texture(
        &mut self,
        _image: &DecodedImage,
        format: PixelFormat,
        label: &str,
    ) -> anyhow::Result<u32> {
        if self.refuse_creation {
            anyhow::bail!("out of device memory");
        }
        let id = self.next_id;
        self.next_id += 1;
        self.created.push((label.to_string(), format));
        Ok(id)
    }

    fn bind(&mut self, unit: TextureUnit, handle: &u32) {
        self.bound.insert(unit, *handle);
    }

    fn unbind(&mut self, unit: TextureUnit) {
        self.bound.remove(&unit);
    }

    fn release(&mut self, handle: u32) {
        self.released.push(handle);
    }
}

pub fn image(channels: u8) -> DecodedImage {
    DecodedImage {
        pixels: vec![128; 2 * 2 * channels as usize],
        width: 2,
        height: 2,
        channels,
    }
}

/// Serves in-memory images by path; anything else fails to decode.
#[derive(Default)]
pub struct FakeDecoder {
    images: HashMap<PathBuf, DecodedImage>,
}

impl FakeDecoder {
    pub fn with(mut self, path: &str, channels: u8) -> Self {
        self.images.insert(PathBuf::from(path), image(channels));
        self
    }
}

impl ImageDecoder for FakeDecoder {
    fn decode(&self, path: &Path) -> anyhow::Result<DecodedImage> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("could not read {}", path.display()))
    }
}
