use std::fmt;

/// The primitive shapes the mesh library can generate and draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MeshKind {
    Plane,
    Box,
    Cylinder,
    TaperedCylinder,
    Cone,
    /// Pyramid with a triangular base.
    Pyramid3,
}

impl MeshKind {
    pub const ALL: [MeshKind; 6] = [
        MeshKind::Plane,
        MeshKind::Box,
        MeshKind::Cylinder,
        MeshKind::TaperedCylinder,
        MeshKind::Cone,
        MeshKind::Pyramid3,
    ];
}

impl fmt::Display for MeshKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MeshKind::Plane => "plane",
            MeshKind::Box => "box",
            MeshKind::Cylinder => "cylinder",
            MeshKind::TaperedCylinder => "tapered cylinder",
            MeshKind::Cone => "cone",
            MeshKind::Pyramid3 => "pyramid",
        };
        f.write_str(name)
    }
}

/// Geometry provider for the primitive shapes.
///
/// `load` uploads a kind's geometry once during setup, no matter how often it
/// is drawn later. `draw` issues the draw call with whatever shader state is
/// bound at that moment.
pub trait MeshLibrary {
    fn load(&mut self, kind: MeshKind);
    fn draw(&mut self, kind: MeshKind);
}
