// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use core::f32::consts::{FRAC_PI_2, PI};
use rocket_math::{Mat4, Quat, Vec3};

mod common;
use common::{approx_eq, approx_eq16, approx_eq3};

const TOL: f32 = 1e-6;

#[test]
fn rot_z_maps_x_to_y() {
    let m = Mat4::rotation_z(FRAC_PI_2);
    approx_eq3(m.transform_point(&Vec3::UNIT_X).to_array(), [0.0, 1.0, 0.0], TOL);
    approx_eq3(m.transform_direction(&Vec3::UNIT_X).to_array(), [0.0, 1.0, 0.0], TOL);
}

#[test]
fn rot_y_maps_z_to_x() {
    let x = Mat4::rotation_y(FRAC_PI_2).transform_direction(&Vec3::UNIT_Z);
    approx_eq3(x.to_array(), [1.0, 0.0, 0.0], TOL);
}

#[test]
fn rot_x_maps_y_to_z() {
    let z = Mat4::rotation_x(FRAC_PI_2).transform_direction(&Vec3::UNIT_Y);
    approx_eq3(z.to_array(), [0.0, 0.0, 1.0], TOL);
}

#[test]
fn elementary_rotations_match_libm_oracle() {
    // The pure-Rust libm keeps the reference independent of the host libm.
    let angle = 0.3_f32;
    let (s, c) = (libm::sinf(angle), libm::cosf(angle));
    let rz = Mat4::rotation_z(angle);
    approx_eq(rz.get(0, 0), c, TOL);
    approx_eq(rz.get(1, 0), s, TOL);
    approx_eq(rz.get(0, 1), -s, TOL);
    approx_eq(rz.get(1, 1), c, TOL);
    let rx = Mat4::rotation_x(angle);
    approx_eq(rx.get(2, 1), s, TOL);
    approx_eq(rx.get(1, 2), -s, TOL);
    let ry = Mat4::rotation_y(angle);
    approx_eq(ry.get(0, 2), s, TOL);
    approx_eq(ry.get(2, 0), -s, TOL);
}

#[test]
fn axis_angle_matches_axis_specific_rotation() {
    for angle in [0.1_f32, FRAC_PI_2, 2.5, -1.2] {
        approx_eq16(
            Mat4::rotation_axis_angle(Vec3::UNIT_Y, angle).to_array(),
            Mat4::rotation_y(angle).to_array(),
            TOL,
        );
        approx_eq16(
            Mat4::rotation_axis_angle(Vec3::UNIT_X, angle).to_array(),
            Mat4::rotation_x(angle).to_array(),
            TOL,
        );
    }
}

#[test]
fn axis_angle_renormalizes_long_axes() {
    approx_eq16(
        Mat4::rotation_axis_angle(Vec3::new(0.0, 0.0, 2.0), FRAC_PI_2).to_array(),
        Mat4::rotation_z(FRAC_PI_2).to_array(),
        TOL,
    );
}

#[test]
fn axis_angle_with_zero_axis_leaves_cosine_diagonal() {
    // Too short to renormalize: only the `cos` terms survive.
    let angle = 0.5_f32;
    let m = Mat4::rotation_axis_angle(Vec3::ZERO, angle);
    let c = angle.cos();
    approx_eq16(m.to_array(), Mat4::scale(c, c, c).to_array(), TOL);
    assert!(Mat4::rotation_axis_angle(Vec3::ZERO, 0.0).is_identity());
}

#[test]
fn quaternion_matrix_matches_axis_angle() {
    let axis = Vec3::new(1.0, -2.0, 0.5);
    for angle in [0.3_f32, 1.7, -2.9] {
        let q = Quat::from_axis_angle(axis, angle);
        approx_eq16(
            Mat4::from_quat(&q).to_array(),
            Mat4::rotation_axis_angle(axis, angle).to_array(),
            1e-5,
        );
    }
}

#[test]
fn from_quat_does_not_renormalize() {
    let q = Quat::new(0.0, 0.0, 0.0, 2.0);
    // Scalar-only quaternions collapse to identity whatever their magnitude.
    assert!(Mat4::from_quat(&q).is_identity());
    // Anything else is skewed by the missing normalization.
    let skewed = Quat::new(1.0, 0.0, 0.0, 1.0);
    assert!((Mat4::from_quat(&skewed).determinant() - 1.0).abs() > 0.5);
    // `Quat::to_mat4` normalizes first.
    approx_eq(skewed.to_mat4().determinant(), 1.0, 1e-5);
}

#[test]
fn quaternion_product_matches_matrix_product() {
    let a = Quat::from_axis_angle(Vec3::UNIT_Y, 0.7);
    let b = Quat::from_axis_angle(Vec3::UNIT_X, -0.4);
    approx_eq16(
        Mat4::from_quat(&a.multiply(&b)).to_array(),
        Mat4::from_quat(&a).multiply(&Mat4::from_quat(&b)).to_array(),
        1e-5,
    );
    approx_eq16(
        Mat4::IDENTITY.rotated(&a).to_array(),
        Mat4::from_quat(&a).to_array(),
        TOL,
    );
}

#[test]
fn euler_applies_yaw_pitch_roll_in_fixed_order() {
    let (yaw, pitch, roll) = (0.4, -0.9, 1.3);
    let expected = Mat4::rotation_y(yaw)
        .multiply(&Mat4::rotation_x(pitch))
        .multiply(&Mat4::rotation_z(roll));
    approx_eq16(
        Mat4::rotation_from_euler(yaw, pitch, roll).to_array(),
        expected.to_array(),
        TOL,
    );
    let mut chained = Mat4::identity();
    chained.rotate_y(yaw);
    chained.rotate_x(pitch);
    chained.rotate_z(roll);
    approx_eq16(chained.to_array(), expected.to_array(), TOL);
}

#[test]
fn euler_matches_axis_specific_rotations() {
    let e = Mat4::rotation_from_euler(FRAC_PI_2, 0.0, 0.0);
    approx_eq3(
        e.transform_direction(&Vec3::UNIT_Z).to_array(),
        [1.0, 0.0, 0.0],
        TOL,
    );
    let e = Mat4::rotation_from_euler(0.0, FRAC_PI_2, 0.0);
    approx_eq3(
        e.transform_direction(&Vec3::UNIT_Y).to_array(),
        [0.0, 0.0, 1.0],
        TOL,
    );
    let e = Mat4::rotation_from_euler(0.0, 0.0, PI);
    approx_eq3(
        e.transform_direction(&Vec3::UNIT_X).to_array(),
        [-1.0, 0.0, 0.0],
        TOL,
    );
}
