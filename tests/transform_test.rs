use approx::assert_relative_eq;
use tableau_ngin::{
    Deg, Matrix4, SquareMatrix, Vector3, Vector4,
    data_structures::transform::{Transform, compose},
};

fn apply(m: Matrix4<f32>, p: [f32; 3]) -> Vector4<f32> {
    m * Vector4::new(p[0], p[1], p[2], 1.0)
}

fn assert_point(actual: Vector4<f32>, expected: [f32; 3]) {
    assert_relative_eq!(actual.x, expected[0], epsilon = 1e-5);
    assert_relative_eq!(actual.y, expected[1], epsilon = 1e-5);
    assert_relative_eq!(actual.z, expected[2], epsilon = 1e-5);
    assert_relative_eq!(actual.w, 1.0, epsilon = 1e-5);
}

#[test]
fn should_scale_then_rotate_then_translate() {
    let m = compose(
        Vector3::new(2.0, 1.0, 1.0),
        Deg(0.0),
        Deg(90.0),
        Deg(0.0),
        Vector3::new(1.0, 0.0, 0.0),
    );

    // (1,0,0) -> scaled (2,0,0) -> rotated (0,0,-2) -> translated (1,0,-2)
    assert_point(apply(m, [1.0, 0.0, 0.0]), [1.0, 0.0, -2.0]);
}

#[test]
fn should_be_identity_for_the_default_transform() {
    let m = Transform::default().to_matrix();

    assert_eq!(m, Matrix4::identity());
    assert_point(apply(m, [3.0, -2.0, 5.0]), [3.0, -2.0, 5.0]);
}

#[test]
fn should_apply_z_rotation_before_x_rotation() {
    let m = compose(
        Vector3::new(1.0, 1.0, 1.0),
        Deg(90.0),
        Deg(0.0),
        Deg(90.0),
        Vector3::new(0.0, 0.0, 0.0),
    );

    // Rz: (1,0,0) -> (0,1,0), then Rx: (0,1,0) -> (0,0,1)
    assert_point(apply(m, [1.0, 0.0, 0.0]), [0.0, 0.0, 1.0]);

    let reversed = Matrix4::from_angle_z(Deg(90.0f32)) * Matrix4::from_angle_x(Deg(90.0f32));
    assert_point(apply(reversed, [1.0, 0.0, 0.0]), [0.0, 1.0, 0.0]);
}

#[test]
fn should_not_scale_the_translation() {
    let m = compose(
        Vector3::new(3.0, 3.0, 3.0),
        Deg(0.0),
        Deg(0.0),
        Deg(0.0),
        Vector3::new(1.0, 2.0, 3.0),
    );

    assert_point(apply(m, [0.0, 0.0, 0.0]), [1.0, 2.0, 3.0]);
    assert_point(apply(m, [1.0, 0.0, 0.0]), [4.0, 2.0, 3.0]);
}

#[test]
fn should_match_compose_for_transforms() {
    let transform = Transform {
        scale: Vector3::new(0.15, 7.0, 0.15),
        rotation: Vector3::new(90.0, 0.0, 70.0),
        position: Vector3::new(12.0, 0.15, 4.0),
    };
    let expected = compose(
        transform.scale,
        Deg(90.0),
        Deg(0.0),
        Deg(70.0),
        transform.position,
    );

    assert_eq!(transform.to_matrix(), expected);
    assert_eq!(
        Transform::from(Vector3::new(1.0, 2.0, 3.0)).to_matrix(),
        Matrix4::from_translation(Vector3::new(1.0, 2.0, 3.0))
    );
}
