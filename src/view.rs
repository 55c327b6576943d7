//! The six fixed views of a hemisphere and their orthographic cameras.

use glam::Vec3;
use std::fmt;

use crate::hemi::Hemisphere;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Lateral,
    Medial,
    Anterior,
    Posterior,
    Dorsal,
    Ventral,
}

impl View {
    /// All views, in rendering order.
    pub const ALL: [View; 6] = [
        View::Lateral,
        View::Medial,
        View::Anterior,
        View::Posterior,
        View::Dorsal,
        View::Ventral,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            View::Lateral => "lateral",
            View::Medial => "medial",
            View::Anterior => "anterior",
            View::Posterior => "posterior",
            View::Dorsal => "dorsal",
            View::Ventral => "ventral",
        }
    }

    /// Unit vector from the mesh towards the camera, in RAS coordinates.
    ///
    /// Lateral and medial depend on the hemisphere: the lateral side of the left hemisphere faces -x.
    pub fn camera_side(&self, hemi: Hemisphere) -> Vec3 {
        let lateral_x = match hemi {
            Hemisphere::Left => -1.0,
            Hemisphere::Right => 1.0,
        };
        match self {
            View::Lateral => Vec3::new(lateral_x, 0.0, 0.0),
            View::Medial => Vec3::new(-lateral_x, 0.0, 0.0),
            View::Anterior => Vec3::Y,
            View::Posterior => Vec3::NEG_Y,
            View::Dorsal => Vec3::Z,
            View::Ventral => Vec3::NEG_Z,
        }
    }

    /// The direction that points up on screen.
    pub fn screen_up(&self) -> Vec3 {
        match self {
            View::Dorsal | View::Ventral => Vec3::Y,
            _ => Vec3::Z,
        }
    }

    pub fn camera(&self, hemi: Hemisphere) -> Camera {
        Camera::new(-self.camera_side(hemi), self.screen_up())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}


/// An orthographic camera given by an orthonormal basis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Viewing direction, from the camera into the scene.
    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl Camera {
    /// `up` must not be parallel to `forward`.
    pub fn new(forward: Vec3, up: Vec3) -> Camera {
        let forward = forward.normalize();
        let right = forward.cross(up).normalize();
        let up = right.cross(forward);
        Camera { forward, up, right }
    }

    /// Screen-plane coordinates `(x, y)` relative to `center` and the depth along the viewing direction.
    /// Smaller depth is closer to the camera.
    pub fn project(&self, point: Vec3, center: Vec3) -> (f32, f32, f32) {
        let rel = point - center;
        (rel.dot(self.right), rel.dot(self.up), rel.dot(self.forward))
    }
}
