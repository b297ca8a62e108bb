//! WGPU implementation of [`TextureDevice`].
//!
//! Each texture unit is backed by one bind group (texture view + sampler) laid
//! out by [`texture_layout`]. Render code picks the bind group of the unit the
//! shader state asks for.

use crate::{
    data_structures::texture::{DecodedImage, PixelFormat, Texture},
    resources::texture::{TextureDevice, TextureUnit},
};

pub fn texture_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("object_texture_bind_group_layout"),
    })
}

#[derive(Debug)]
pub struct GpuTextures {
    device: wgpu::Device,
    queue: wgpu::Queue,
    layout: wgpu::BindGroupLayout,
    units: Vec<Option<wgpu::BindGroup>>,
}

impl GpuTextures {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        let layout = texture_layout(&device);
        Self {
            device,
            queue,
            layout,
            units: Vec::new(),
        }
    }

    /// Request an adapter and device without a surface, for offscreen use and tests.
    pub async fn headless() -> anyhow::Result<Self> {
        log::info!("WGPU headless setup");
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..wgpu::InstanceDescriptor::new_without_display_handle()
        });
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await?;
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("tableau device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                ..Default::default()
            })
            .await?;
        Ok(Self::new(device, queue))
    }

    /// How many textures one shader stage may sample, i.e. the usable unit count.
    pub fn max_units(&self) -> usize {
        self.device.limits().max_sampled_textures_per_shader_stage as usize
    }

    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    pub fn bind_group(&self, unit: TextureUnit) -> Option<&wgpu::BindGroup> {
        self.units.get(unit.index()).and_then(|group| group.as_ref())
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }
}

impl TextureDevice for GpuTextures {
    type Handle = Texture;

    fn create_texture(
        &mut self,
        image: &DecodedImage,
        format: PixelFormat,
        label: &str,
    ) -> anyhow::Result<Texture> {
        Texture::from_decoded(&self.device, &self.queue, image, format, label)
    }

    fn bind(&mut self, unit: TextureUnit, handle: &Texture) {
        let group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&handle.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&handle.sampler),
                },
            ],
            label: Some(&format!("texture unit {}", unit.0)),
        });
        if self.units.len() <= unit.index() {
            self.units.resize_with(unit.index() + 1, || None);
        }
        self.units[unit.index()] = Some(group);
    }

    fn unbind(&mut self, unit: TextureUnit) {
        if let Some(slot) = self.units.get_mut(unit.index()) {
            *slot = None;
        }
    }

    fn release(&mut self, handle: Texture) {
        handle.texture.destroy();
    }
}
