// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use bytemuck::{Pod, Zeroable};

use crate::math::Vec3;

/// Homogeneous 4-component vector `(x, y, z, w)`.
///
/// Laid out as four packed `f32` so packed float buffers can be viewed as
/// `&[Vec4]` (see [`crate::math::Mat4::transform_raw`]).
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vec4 {
    data: [f32; 4],
}

impl Vec4 {
    /// Creates a vector from components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            data: [x, y, z, w],
        }
    }

    /// Lifts a point (`w = 1`).
    pub const fn from_point(p: Vec3) -> Self {
        Self::new(p.x(), p.y(), p.z(), 1.0)
    }

    /// Lifts a direction (`w = 0`).
    pub const fn from_direction(d: Vec3) -> Self {
        Self::new(d.x(), d.y(), d.z(), 0.0)
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Drops `w`.
    pub const fn xyz(&self) -> Vec3 {
        Vec3::new(self.data[0], self.data[1], self.data[2])
    }

    /// X component.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// W component.
    pub const fn w(&self) -> f32 {
        self.data[3]
    }
}

impl From<[f32; 4]> for Vec4 {
    fn from(value: [f32; 4]) -> Self {
        Self { data: value }
    }
}
