// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use rocket_math::{Mat4, Quat, Vec3};

/// Absolute-or-relative tolerance check used by the math suites.
pub fn close(a: f32, b: f32, abs_tol: f32) -> bool {
    let diff = (a - b).abs();
    let scale = a.abs().max(b.abs());
    diff <= abs_tol.max(abs_tol * scale)
}

pub fn approx_eq(a: f32, b: f32, tol: f32) {
    assert!(close(a, b, tol), "expected {b}, got {a} (tol {tol})");
}

pub fn approx_eq3(a: [f32; 3], b: [f32; 3], tol: f32) {
    for i in 0..3 {
        assert!(close(a[i], b[i], tol), "index {i}: {a:?} vs {b:?}");
    }
}

pub fn approx_eq16(a: [f32; 16], b: [f32; 16], tol: f32) {
    for i in 0..16 {
        assert!(close(a[i], b[i], tol), "index {i}: {a:?} vs {b:?}");
    }
}

pub fn max_abs_diff(a: &Mat4, b: &Mat4) -> f32 {
    a.to_array()
        .iter()
        .zip(b.to_array().iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

/// `T · R · S` built from elementary factories.
pub fn trs(translation: Vec3, rotation: Quat, scale: Vec3) -> Mat4 {
    Mat4::from_translation(translation)
        .multiply(&Mat4::from_quat(&rotation))
        .multiply(&Mat4::from_scale(scale))
}
