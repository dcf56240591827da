// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::math::{Vec3, EPSILON};

/// Plane `n · p + d = 0` with unit normal `n` and signed distance `d`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Plane {
    normal: Vec3,
    distance: f32,
}

impl Plane {
    /// Creates a plane, normalizing `normal` and scaling `distance` to match.
    ///
    /// A degenerate normal (length ≤ `EPSILON`) is kept as given.
    pub fn new(normal: Vec3, distance: f32) -> Self {
        let len = normal.length();
        if len <= EPSILON {
            return Self { normal, distance };
        }
        let inv = 1.0 / len;
        Self {
            normal: normal.scale(inv),
            distance: distance * inv,
        }
    }

    /// Plane through `point` facing `normal`.
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        let n = normal.normalize();
        Self {
            normal: n,
            distance: -n.dot(&point),
        }
    }

    /// Unit normal.
    pub const fn normal(&self) -> Vec3 {
        self.normal
    }

    /// Signed distance term `d`.
    pub const fn distance(&self) -> f32 {
        self.distance
    }

    /// Signed distance from `point` to the plane.
    pub fn distance_to(&self, point: &Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}
