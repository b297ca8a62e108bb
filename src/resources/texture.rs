//! Texture registry: decoded image files turned into device textures, each
//! tagged and parked on its own texture unit.
//!
//! Units are handed out lowest-free-first, so as long as nothing is unloaded
//! individually the unit of a texture equals its position in load order.
//! The number of units is bounded; a load that would need one more unit than
//! the device offers is rejected before anything is decoded.

use std::{fmt, path::Path};

use thiserror::Error;

use crate::{
    data_structures::{
        tagged::{DuplicatePolicy, Inserted, TaggedStore},
        texture::{DecodedImage, PixelFormat},
    },
    resources::ImageDecoder,
};

/// Number of texture units a scene can use unless the device says otherwise.
pub const DEFAULT_TEXTURE_UNITS: usize = 16;

/// Index of a texture unit (sampler slot) on the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TextureUnit(pub u32);

impl TextureUnit {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TextureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit {}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextureError {
    #[error("all {capacity} texture units are in use")]
    CapacityExhausted { capacity: usize },
    #[error("images with {channels} channels are not supported, expected 3 or 4")]
    UnsupportedChannels { channels: u8 },
}

/// The device side of texture management.
///
/// Implementations own the actual GPU objects; the registry only keeps the
/// handles they return.
pub trait TextureDevice {
    type Handle: Clone + fmt::Debug;

    /// Create a texture with repeat wrapping, linear filtering and mipmaps.
    fn create_texture(
        &mut self,
        image: &DecodedImage,
        format: PixelFormat,
        label: &str,
    ) -> anyhow::Result<Self::Handle>;

    fn bind(&mut self, unit: TextureUnit, handle: &Self::Handle);

    fn unbind(&mut self, unit: TextureUnit);

    fn release(&mut self, handle: Self::Handle);
}

#[derive(Clone, Debug)]
pub struct TextureEntry<H> {
    pub handle: H,
    pub unit: TextureUnit,
}

#[derive(Debug)]
pub struct TextureRegistry<H> {
    entries: TaggedStore<TextureEntry<H>>,
    capacity: usize,
    bound: bool,
}

impl<H: Clone + fmt::Debug> TextureRegistry<H> {
    pub fn new(capacity: usize, policy: DuplicatePolicy) -> Self {
        Self {
            entries: TaggedStore::new(policy),
            capacity,
            bound: false,
        }
    }

    /// Decode `path` and upload it as the texture tagged `tag`.
    ///
    /// On failure the error is logged and the registry is left as it was.
    /// Errors raised by the registry itself are [`TextureError`]s and can be
    /// recovered with `downcast_ref`.
    pub fn load<D, I>(
        &mut self,
        device: &mut D,
        decoder: &I,
        path: &Path,
        tag: &str,
    ) -> anyhow::Result<TextureUnit>
    where
        D: TextureDevice<Handle = H>,
        I: ImageDecoder + ?Sized,
    {
        let result = self.try_load(device, decoder, path, tag);
        if let Err(e) = &result {
            log::error!("Could not load texture '{tag}' from {}: {e:#}", path.display());
        }
        result
    }

    fn try_load<D, I>(
        &mut self,
        device: &mut D,
        decoder: &I,
        path: &Path,
        tag: &str,
    ) -> anyhow::Result<TextureUnit>
    where
        D: TextureDevice<Handle = H>,
        I: ImageDecoder + ?Sized,
    {
        self.entries.admits(tag)?;
        let unit = match (self.entries.policy(), self.entries.get(tag)) {
            (DuplicatePolicy::Replace, Some(existing)) => existing.unit,
            _ => self.free_unit().ok_or(TextureError::CapacityExhausted {
                capacity: self.capacity,
            })?,
        };

        let image = decoder.decode(path)?;
        let format = PixelFormat::from_channels(image.channels).ok_or(
            TextureError::UnsupportedChannels {
                channels: image.channels,
            },
        )?;
        let handle = device.create_texture(&image, format, tag)?;
        log::info!(
            "Loaded texture '{tag}' from {}: {}x{}, {} channels, {unit}",
            path.display(),
            image.width,
            image.height,
            image.channels
        );

        if self.bound {
            device.bind(unit, &handle);
        }
        let entry = TextureEntry { handle, unit };
        if let Inserted::Replaced(_, old) = self.entries.insert(tag, entry)? {
            device.release(old.handle);
        }
        Ok(unit)
    }

    /// Bind every texture to its unit. Textures loaded afterwards are bound right away.
    pub fn bind_all<D: TextureDevice<Handle = H>>(&mut self, device: &mut D) {
        for (_, entry) in self.entries.iter() {
            device.bind(entry.unit, &entry.handle);
        }
        self.bound = true;
    }

    pub fn find_handle(&self, tag: &str) -> Option<&H> {
        self.entries.get(tag).map(|entry| &entry.handle)
    }

    pub fn find_unit(&self, tag: &str) -> Option<TextureUnit> {
        self.entries.get(tag).map(|entry| entry.unit)
    }

    /// Unbind and free the texture `tag` resolves to; its unit becomes free again.
    pub fn unload<D: TextureDevice<Handle = H>>(&mut self, device: &mut D, tag: &str) -> bool {
        match self.entries.remove(tag) {
            Some(entry) => {
                device.unbind(entry.unit);
                device.release(entry.handle);
                log::info!("Unloaded texture '{tag}', {} is free", entry.unit);
                true
            }
            None => false,
        }
    }

    /// Free every texture. The registry is empty afterwards.
    pub fn release_all<D: TextureDevice<Handle = H>>(&mut self, device: &mut D) {
        let released = self.entries.len();
        for (_, entry) in self.entries.drain() {
            device.unbind(entry.unit);
            device.release(entry.handle);
        }
        self.bound = false;
        log::info!("Released {released} textures");
    }

    /// Tag → unit assignment, in load order. Shadowed duplicates are listed too.
    pub fn units(&self) -> impl Iterator<Item = (&str, TextureUnit)> {
        self.entries.iter().map(|(tag, entry)| (tag, entry.unit))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &TextureEntry<H>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    fn free_unit(&self) -> Option<TextureUnit> {
        (0..self.capacity as u32)
            .map(TextureUnit)
            .find(|unit| self.entries.iter().all(|(_, entry)| entry.unit != *unit))
    }
}

impl<H: Clone + fmt::Debug> Default for TextureRegistry<H> {
    fn default() -> Self {
        Self::new(DEFAULT_TEXTURE_UNITS, DuplicatePolicy::default())
    }
}
