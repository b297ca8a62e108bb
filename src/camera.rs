//! Viewer state: camera placement, projection mode and movement speed.
//!
//! The view is pushed once per frame through the shader bridge before the
//! scene is rendered. Projections are built in OpenGL clip-space convention;
//! sinks targeting WGPU convert them (see `pipelines::uniform`).

use cgmath::{Angle, Deg, InnerSpace, Matrix4, Point3, Vector3};

use crate::pipelines::shader::ShaderBridge;

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 800;
const NEAR: f32 = 0.1;
const FAR: f32 = 100.0;
/// Half extent of the orthographic view box.
const ORTHO_EXTENT: f32 = 10.0;
/// Degrees of rotation per pixel of cursor movement.
pub const LOOK_SENSITIVITY: f32 = 0.1;
/// Pitch stays short of straight up or down so `front` never lines up with `up`.
const MAX_PITCH: f32 = 89.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Point3<f32>,
    pub front: Vector3<f32>,
    pub up: Vector3<f32>,
    /// Vertical field of view of the perspective projection.
    pub zoom: Deg<f32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
}

impl Camera {
    pub fn new<P: Into<Point3<f32>>, V: Into<Vector3<f32>>>(
        position: P,
        front: V,
        up: V,
        zoom: Deg<f32>,
    ) -> Self {
        Self {
            position: position.into(),
            front: front.into(),
            up: up.into(),
            zoom,
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.front.normalize(), self.up)
    }

    pub fn right(&self) -> Vector3<f32> {
        self.front.cross(self.up).normalize()
    }

    /// Move along the camera's own axes; `distance` is usually speed × frame time.
    pub fn move_by(&mut self, movement: Movement, distance: f32) {
        let front = self.front.normalize();
        let up = self.up.normalize();
        let offset = match movement {
            Movement::Forward => front * distance,
            Movement::Backward => -front * distance,
            Movement::Right => self.right() * distance,
            Movement::Left => -self.right() * distance,
            Movement::Up => up * distance,
            Movement::Down => -up * distance,
        };
        self.position += offset;
    }

    /// Heading about the Y axis; 0° looks down +X, 90° down +Z.
    pub fn yaw(&self) -> Deg<f32> {
        Deg::atan2(self.front.z, self.front.x)
    }

    /// Elevation above the horizontal plane.
    pub fn pitch(&self) -> Deg<f32> {
        Deg::asin(self.front.normalize().y)
    }

    /// Turn by a cursor offset in pixels; positive `dy` looks up.
    pub fn look(&mut self, dx: f32, dy: f32) {
        let yaw = self.yaw() + Deg(dx * LOOK_SENSITIVITY);
        let pitch = Deg((self.pitch().0 + dy * LOOK_SENSITIVITY).clamp(-MAX_PITCH, MAX_PITCH));
        self.front = Vector3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
    }
}

/// Turns absolute cursor positions into offsets for [`Camera::look`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorTracker {
    last: Option<(f32, f32)>,
}

impl CursorTracker {
    /// Offset since the previous position, y flipped so that moving up is positive.
    /// The first position only primes the tracker.
    pub fn offset(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        let offset = self.last.map(|(last_x, last_y)| (x - last_x, last_y - y));
        self.last = Some((x, y));
        offset
    }

    /// Forget the last position, e.g. after the cursor was released.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new((0.0, 5.0, 12.0), (0.0, -0.5, -2.0), (0.0, 1.0, 0.0), Deg(80.0))
    }
}

/// Camera movement speed, adjusted by the scroll wheel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraSpeed(f32);

impl CameraSpeed {
    pub const MIN: f32 = 0.1;
    pub const MAX: f32 = 20.0;

    pub fn new(speed: f32) -> Self {
        Self(speed.clamp(Self::MIN, Self::MAX))
    }

    pub fn scroll(&mut self, delta: f32) {
        self.0 = (self.0 + delta).clamp(Self::MIN, Self::MAX);
    }

    pub fn get(&self) -> f32 {
        self.0
    }

    /// Distance covered in `dt` seconds.
    pub fn distance(&self, dt: f32) -> f32 {
        dt * self.0
    }
}

impl Default for CameraSpeed {
    fn default() -> Self {
        Self(1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub camera: Camera,
    pub speed: CameraSpeed,
    pub mode: ProjectionMode,
    width: u32,
    height: u32,
}

impl View {
    pub fn new(camera: Camera, width: u32, height: u32) -> Self {
        Self {
            camera,
            speed: CameraSpeed::default(),
            mode: ProjectionMode::default(),
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.width = width;
            self.height = height;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.mode {
            ProjectionMode::Perspective => {
                cgmath::perspective(self.camera.zoom, self.aspect(), NEAR, FAR)
            }
            ProjectionMode::Orthographic => cgmath::ortho(
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                -ORTHO_EXTENT,
                ORTHO_EXTENT,
                NEAR,
                FAR,
            ),
        }
    }

    /// Push `view`, `projection` and `viewPosition` for the coming frame.
    pub fn apply(&self, shader: &mut ShaderBridge<'_>) {
        shader.set_view(
            self.camera.view_matrix(),
            self.projection_matrix(),
            self.camera.position,
        );
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(Camera::default(), DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
