// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Linear algebra primitives: the [`Mat4`] transform matrix plus the vector,
//! quaternion and plane value types it consumes.
//!
//! Everything is `f32`. Thresholds used to detect degenerate input are
//! collected here so the policy is visible in one place.

use core::f32::consts::TAU;

mod mat4;
mod plane;
mod quat;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use plane::Plane;
pub use quat::Quat;
pub use vec3::Vec3;
pub use vec4::Vec4;

/// Degeneracy threshold for vector lengths, billboard deltas and the
/// field-of-view check in [`Mat4::perspective`].
pub const EPSILON: f32 = 1e-6;

/// Near-zero threshold for determinants and decomposed scale factors.
///
/// Values at or below this are treated as zero by [`Mat4::inverse`] and
/// [`Mat4::decompose`].
pub const TOLERANCE: f32 = 2e-37;

/// Axes shorter than this are not renormalized by
/// [`Mat4::rotation_axis_angle`].
pub const AXIS_NORMALIZE_MIN: f32 = 1e-6;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}

/// Canonicalizes signed zero (`-0.0`) to `+0.0` without affecting non-zero values.
#[inline]
pub(crate) fn canonicalize_zero(value: f32) -> f32 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
