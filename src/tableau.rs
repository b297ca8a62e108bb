//! The desk tableau: a pencil lying on a playmat next to a deck of trading
//! cards and two dice.
//!
//! Texture paths are relative to the decoder's asset root. Textures are
//! listed in unit order.

use crate::{
    data_structures::{
        light::LightSource,
        material::Material,
        placement::{ObjectPlacement, PlacementGroup, SceneConfig, TextureSource},
    },
    resources::mesh::MeshKind,
};

pub fn scene() -> SceneConfig {
    SceneConfig {
        textures: textures(),
        materials: materials(),
        lights: lights(),
        groups: vec![pencil(), cards(), dice()],
    }
}

pub fn textures() -> Vec<TextureSource> {
    vec![
        TextureSource::new("textures/Eevee_playmat_texture.png", "playmat"),
        TextureSource::new("textures/Wood_texture.jpg", "wood"),
        TextureSource::new("textures/Pencil_cylinder_texture.png", "pencilCylinder"),
        TextureSource::new("textures/Metal_grate_texture.jpg", "metal"),
        TextureSource::new("textures/Plains_texture.png", "plains"),
        TextureSource::new("textures/Plastic_texture.jpg", "plastic"),
        TextureSource::new("textures/Lead_texture.jpg", "lead"),
        TextureSource::new("textures/Layered_cards_texture.png", "deck"),
        TextureSource::new("textures/Rubber_texture.jpg", "rubber"),
        TextureSource::new("textures/Marble_texture.jpg", "marble"),
    ]
}

pub fn materials() -> Vec<Material> {
    vec![
        // metal ferrule: dim ambient, strong highlight
        Material::new(
            "metalMaterial",
            [0.2, 0.2, 0.2],
            0.3,
            [0.2, 0.2, 0.2],
            [0.5, 0.5, 0.5],
            10.0,
        ),
        Material::new(
            "woodMaterial",
            [0.1, 0.1, 0.1],
            0.2,
            [0.2, 0.2, 0.2],
            [0.1, 0.1, 0.1],
            0.3,
        ),
        // card sleeves
        Material::new(
            "plasticMaterial",
            [0.0, 0.0, 0.3],
            0.4,
            [0.0, 0.0, 0.8],
            [0.5, 0.5, 0.5],
            6.0,
        ),
        Material::new(
            "cardMaterial",
            [0.2, 0.2, 0.2],
            0.4,
            [0.3, 0.3, 0.3],
            [0.1, 0.1, 0.1],
            0.1,
        ),
        // playmat
        Material::new(
            "fabricMaterial",
            [0.2, 0.2, 0.2],
            0.3,
            [0.3, 0.3, 0.2],
            [0.1, 0.1, 0.1],
            0.0,
        ),
        Material::new(
            "glossyPencilMaterial",
            [0.3, 0.2, 0.0],
            0.5,
            [0.2, 0.2, 0.1],
            [0.3, 0.3, 0.3],
            2.0,
        ),
        Material::new(
            "pencilLeadMaterial",
            [0.1, 0.1, 0.1],
            0.2,
            [0.2, 0.2, 0.2],
            [0.0, 0.0, 0.0],
            0.0,
        ),
        Material::new(
            "pinkEraserMaterial",
            [0.5, 0.2, 0.3],
            0.3,
            [0.3, 0.15, 0.1],
            [0.2, 0.2, 0.2],
            2.0,
        ),
        Material::new(
            "marbleMaterial",
            [0.1, 0.3, 0.1],
            0.4,
            [0.1, 0.3, 0.1],
            [0.5, 0.5, 0.5],
            6.0,
        ),
    ]
}

pub fn lights() -> Vec<LightSource> {
    vec![
        // lightbulb to the west
        LightSource::new(
            [-30.0, 14.0, -2.0],
            [0.3, 0.3, 0.4],
            [0.6, 0.5, 0.4],
            [0.2, 0.2, 0.2],
            32.0,
            0.4,
        ),
        // sunlight from the north
        LightSource::new(
            [3.0, 20.0, -26.0],
            [0.3, 0.3, 0.3],
            [0.6, 0.55, 0.4],
            [0.6, 0.6, 0.6],
            32.0,
            0.6,
        ),
    ]
}

/// Playmat and the pencil: body, ferrule, eraser, sharpened wood and lead.
pub fn pencil() -> PlacementGroup {
    PlacementGroup {
        name: "pencil".to_string(),
        placements: vec![
            ObjectPlacement::new("playmat", MeshKind::Plane)
                .scale(15.0, 1.0, 8.0)
                .texture("playmat")
                .uv_scale(1.0, 1.0)
                .material("fabricMaterial"),
            ObjectPlacement::new("pencil body", MeshKind::Cylinder)
                .scale(0.15, 7.0, 0.15)
                .rotation(90.0, 0.0, 70.0)
                .position(12.0, 0.15, 4.0)
                .texture("pencilCylinder")
                .uv_scale(1.0, 1.0)
                .material("glossyPencilMaterial"),
            ObjectPlacement::new("pencil ferrule", MeshKind::Cylinder)
                .scale(0.155, 0.35, 0.155)
                .rotation(90.0, 0.0, 70.0)
                .position(5.6, 0.15, 6.33)
                .texture("metal")
                .uv_scale(0.7, 0.7)
                .material("metalMaterial"),
            // keeps the ferrule's UV scale
            ObjectPlacement::new("pencil eraser", MeshKind::Cylinder)
                .scale(0.15, 0.5, 0.15)
                .rotation(90.0, 0.0, 70.0)
                .position(5.6, 0.15, 6.33)
                .texture("rubber")
                .material("pinkEraserMaterial"),
            ObjectPlacement::new("pencil tip", MeshKind::TaperedCylinder)
                .scale(0.15, 0.42, 0.15)
                .rotation(90.0, 0.0, -110.0)
                .position(12.0, 0.15, 4.0)
                .texture("wood")
                .uv_scale(1.0, 1.0)
                .material("woodMaterial"),
            ObjectPlacement::new("pencil lead", MeshKind::Cone)
                .scale(0.145, 0.75, 0.145)
                .rotation(90.0, 0.0, -110.0)
                .position(12.0, 0.15, 4.0)
                .texture("lead")
                .material("pencilLeadMaterial"),
        ],
    }
}

/// A sleeved deck, a face-up card and a fanned stack of sleeved cards.
pub fn cards() -> PlacementGroup {
    let sleeved = |label: &str, y_rotation: f32, x: f32, y: f32, z: f32| {
        ObjectPlacement::new(label, MeshKind::Plane)
            .scale(1.75, 0.0, 2.45)
            .rotation(0.0, y_rotation, 0.0)
            .position(x, y, z)
            .texture("plastic")
            .uv_scale(1.0, 1.0)
            .material("plasticMaterial")
    };
    PlacementGroup {
        name: "cards".to_string(),
        placements: vec![
            ObjectPlacement::new("deck", MeshKind::Box)
                .scale(3.5, 2.0, 4.9)
                .rotation(0.0, 5.0, 0.0)
                .position(-10.0, 1.0, 2.7)
                .texture("deck")
                .uv_scale(1.0, 1.0)
                .material("plasticMaterial"),
            ObjectPlacement::new("deck top", MeshKind::Box)
                .scale(3.5, 0.02, 4.9)
                .rotation(0.0, 5.0, 0.0)
                .position(-10.0, 2.01, 2.7)
                .texture("plastic")
                .uv_scale(1.0, 1.0)
                .material("plasticMaterial"),
            ObjectPlacement::new("plains card", MeshKind::Plane)
                .scale(1.75, 0.0, 2.45)
                .rotation(0.0, 20.0, 0.0)
                .position(-1.5, 0.05, 3.0)
                .texture("plains")
                .uv_scale(1.0, 1.0)
                .material("cardMaterial"),
            sleeved("blue card", -10.0, -0.25, 0.02, 3.0),
            sleeved("blue card stack top", -20.0, 0.3, 0.01, 3.25),
            sleeved("blue card stack middle", -22.0, 0.3, 0.005, 3.3),
            sleeved("blue card stack bottom", -22.0, 0.3, 0.005, 3.3),
        ],
    }
}

/// A four-sided and a six-sided marble die.
pub fn dice() -> PlacementGroup {
    PlacementGroup {
        name: "dice".to_string(),
        placements: vec![
            ObjectPlacement::new("pyramid die", MeshKind::Pyramid3)
                .scale(0.8, 0.8, 0.8)
                .rotation(0.0, -30.0, 0.0)
                .position(-3.1, 0.4, -0.64)
                .texture("marble")
                .uv_scale(1.1, 1.1)
                .material("marbleMaterial"),
            ObjectPlacement::new("cube die", MeshKind::Box)
                .scale(0.8, 0.8, 0.8)
                .rotation(0.0, -45.0, 0.0)
                .position(-1.4, 0.4, -1.5)
                .texture("marble")
                .uv_scale(1.0, 1.0)
                .material("marbleMaterial"),
        ],
    }
}
