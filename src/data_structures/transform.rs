//! Model matrix composition for placed objects.
//!
//! Every drawn object carries a scale, three Euler angles in degrees and a
//! position. They are combined into a single model matrix in a fixed order:
//!
//! ```text
//! M = T(position) · Rx · Ry · Rz · S(scale)
//! ```
//!
//! Scale is applied first, then the Z, Y and X rotations about the world
//! axes, then the translation. The matrix is rebuilt for every draw call.

use cgmath::{Deg, Matrix4, Vector3};

/// Scale, rotation and position of one placed object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    /// Rotation about the X, Y and Z axes in degrees.
    pub rotation: Vector3<f32>,
    pub position: Vector3<f32>,
}

impl Transform {
    /// Identity transformation (no move, rotate, or scale).
    pub fn new() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            position: Vector3::new(0.0, 0.0, 0.0),
        }
    }

    pub fn to_matrix(&self) -> Matrix4<f32> {
        compose(
            self.scale,
            Deg(self.rotation.x),
            Deg(self.rotation.y),
            Deg(self.rotation.z),
            self.position,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vector3<f32>> for Transform {
    fn from(position: Vector3<f32>) -> Self {
        Transform {
            position,
            ..Default::default()
        }
    }
}

/// Compose a model matrix from scale, per-axis rotations and translation.
pub fn compose(
    scale: Vector3<f32>,
    rot_x: Deg<f32>,
    rot_y: Deg<f32>,
    rot_z: Deg<f32>,
    position: Vector3<f32>,
) -> Matrix4<f32> {
    Matrix4::from_translation(position)
        * Matrix4::from_angle_x(rot_x)
        * Matrix4::from_angle_y(rot_y)
        * Matrix4::from_angle_z(rot_z)
        * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}
