use std::path::Path;

use tableau_ngin::{
    data_structures::{tagged::DuplicatePolicy, texture::PixelFormat},
    resources::texture::{TextureError, TextureRegistry, TextureUnit},
};

use crate::common::test_utils::{FakeDecoder, FakeDevice, init_logger};

mod common;

fn decoder() -> FakeDecoder {
    FakeDecoder::default()
        .with("a.png", 4)
        .with("b.jpg", 3)
        .with("c.png", 4)
        .with("gray.png", 1)
        .with("gray_alpha.png", 2)
}

#[test]
fn should_load_rgb_and_rgba_images_with_matching_formats() {
    init_logger();
    let mut device = FakeDevice::default();
    let mut registry = TextureRegistry::new(16, DuplicatePolicy::Reject);

    let a = registry.load(&mut device, &decoder(), Path::new("a.png"), "a").unwrap();
    let b = registry.load(&mut device, &decoder(), Path::new("b.jpg"), "b").unwrap();

    assert_eq!(a, TextureUnit(0));
    assert_eq!(b, TextureUnit(1));
    assert_eq!(
        device.created,
        vec![
            ("a".to_string(), PixelFormat::Rgba8),
            ("b".to_string(), PixelFormat::Rgb8)
        ]
    );
    assert_eq!(registry.find_handle("a"), Some(&0));
    assert_eq!(registry.find_handle("b"), Some(&1));
    assert_eq!(registry.find_unit("b"), Some(TextureUnit(1)));
}

#[test]
fn should_reject_unsupported_channel_counts_without_mutation() {
    init_logger();
    let mut device = FakeDevice::default();
    let mut registry = TextureRegistry::new(16, DuplicatePolicy::Reject);
    registry.load(&mut device, &decoder(), Path::new("a.png"), "a").unwrap();

    for (path, channels) in [("gray.png", 1u8), ("gray_alpha.png", 2)] {
        let err = registry
            .load(&mut device, &decoder(), Path::new(path), "gray")
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<TextureError>(),
            Some(&TextureError::UnsupportedChannels { channels })
        );
    }

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.find_unit("gray"), None);
    assert_eq!(device.created.len(), 1);
}

#[test]
fn should_leave_registry_untouched_when_decoding_fails() {
    init_logger();
    let mut device = FakeDevice::default();
    let mut registry = TextureRegistry::new(16, DuplicatePolicy::Reject);

    assert!(
        registry
            .load(&mut device, &decoder(), Path::new("missing.png"), "missing")
            .is_err()
    );
    assert!(registry.is_empty());
    assert!(device.created.is_empty());
}

#[test]
fn should_leave_registry_untouched_when_the_device_refuses() {
    init_logger();
    let mut device = FakeDevice {
        refuse_creation: true,
        ..Default::default()
    };
    let mut registry = TextureRegistry::new(16, DuplicatePolicy::Reject);

    assert!(registry.load(&mut device, &decoder(), Path::new("a.png"), "a").is_err());
    assert!(registry.is_empty());
}

#[test]
fn should_return_none_for_unregistered_tags() {
    let registry: TextureRegistry<u32> = TextureRegistry::default();

    assert_eq!(registry.find_handle("nope"), None);
    assert_eq!(registry.find_unit("nope"), None);
    assert!(registry.is_empty());
}

#[test]
fn should_fail_loudly_when_units_run_out() {
    init_logger();
    let mut device = FakeDevice::default();
    let mut registry = TextureRegistry::new(2, DuplicatePolicy::Reject);
    registry.load(&mut device, &decoder(), Path::new("a.png"), "a").unwrap();
    registry.load(&mut device, &decoder(), Path::new("b.jpg"), "b").unwrap();

    let err = registry
        .load(&mut device, &decoder(), Path::new("c.png"), "c")
        .unwrap_err();

    assert_eq!(
        err.downcast_ref::<TextureError>(),
        Some(&TextureError::CapacityExhausted { capacity: 2 })
    );
    assert_eq!(registry.len(), 2);
    // rejected before any device work
    assert_eq!(device.created.len(), 2);
}

#[test]
fn should_shadow_duplicate_tags_with_the_first_entry() {
    init_logger();
    let mut device = FakeDevice::default();
    let mut registry = TextureRegistry::new(16, DuplicatePolicy::Shadow);

    registry.load(&mut device, &decoder(), Path::new("a.png"), "a").unwrap();
    registry.load(&mut device, &decoder(), Path::new("b.jpg"), "b").unwrap();
    let again = registry.load(&mut device, &decoder(), Path::new("c.png"), "a").unwrap();
    registry.bind_all(&mut device);

    assert_eq!(again, TextureUnit(2));
    assert_eq!(registry.find_unit("a"), Some(TextureUnit(0)));
    assert_eq!(registry.find_handle("a"), Some(&0));
    assert_eq!(registry.len(), 3);
    assert_eq!(device.bound.len(), 3);
}

#[test]
fn should_reject_duplicate_tags_by_default() {
    init_logger();
    let mut device = FakeDevice::default();
    let mut registry = TextureRegistry::default();

    registry.load(&mut device, &decoder(), Path::new("a.png"), "a").unwrap();
    assert!(registry.load(&mut device, &decoder(), Path::new("c.png"), "a").is_err());

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.find_handle("a"), Some(&0));
    assert_eq!(device.created.len(), 1);
}

#[test]
fn should_replace_duplicate_tags_in_place() {
    init_logger();
    let mut device = FakeDevice::default();
    let mut registry = TextureRegistry::new(16, DuplicatePolicy::Replace);

    registry.load(&mut device, &decoder(), Path::new("a.png"), "a").unwrap();
    registry.load(&mut device, &decoder(), Path::new("b.jpg"), "b").unwrap();
    registry.bind_all(&mut device);
    let unit = registry.load(&mut device, &decoder(), Path::new("c.png"), "a").unwrap();

    assert_eq!(unit, TextureUnit(0));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.find_handle("a"), Some(&2));
    assert_eq!(device.released, vec![0]);
    assert_eq!(device.bound.get(&TextureUnit(0)), Some(&2));
}

#[test]
fn should_bind_every_texture_to_its_unit() {
    init_logger();
    let mut device = FakeDevice::default();
    let mut registry = TextureRegistry::default();
    registry.load(&mut device, &decoder(), Path::new("a.png"), "a").unwrap();
    registry.load(&mut device, &decoder(), Path::new("b.jpg"), "b").unwrap();

    assert!(device.bound.is_empty());
    registry.bind_all(&mut device);

    assert!(registry.is_bound());
    assert_eq!(device.bound.get(&TextureUnit(0)), Some(&0));
    assert_eq!(device.bound.get(&TextureUnit(1)), Some(&1));
    let units: Vec<_> = registry.units().collect();
    assert_eq!(units, vec![("a", TextureUnit(0)), ("b", TextureUnit(1))]);
}

#[test]
fn should_reuse_the_unit_of_an_unloaded_texture() {
    init_logger();
    let mut device = FakeDevice::default();
    let mut registry = TextureRegistry::default();
    registry.load(&mut device, &decoder(), Path::new("a.png"), "a").unwrap();
    registry.load(&mut device, &decoder(), Path::new("b.jpg"), "b").unwrap();
    registry.bind_all(&mut device);

    assert!(registry.unload(&mut device, "a"));
    assert!(!registry.unload(&mut device, "a"));
    assert_eq!(registry.find_unit("a"), None);
    assert_eq!(registry.find_unit("b"), Some(TextureUnit(1)));
    assert!(!device.bound.contains_key(&TextureUnit(0)));

    let unit = registry.load(&mut device, &decoder(), Path::new("c.png"), "c").unwrap();
    assert_eq!(unit, TextureUnit(0));
    // loaded after bind_all, so bound immediately
    assert_eq!(device.bound.get(&TextureUnit(0)), Some(&2));
}

#[test]
fn should_release_everything() {
    init_logger();
    let mut device = FakeDevice::default();
    let mut registry = TextureRegistry::default();
    registry.load(&mut device, &decoder(), Path::new("a.png"), "a").unwrap();
    registry.load(&mut device, &decoder(), Path::new("b.jpg"), "b").unwrap();
    registry.bind_all(&mut device);
    assert_eq!(registry.find_unit("a"), Some(TextureUnit(0)));

    registry.release_all(&mut device);

    assert!(registry.is_empty());
    assert!(!registry.is_bound());
    assert_eq!(device.released, vec![0, 1]);
    assert!(device.bound.is_empty());
    assert_eq!(registry.find_unit("a"), None);
}
