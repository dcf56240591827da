// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use rocket_math::{Mat4, Vec3, Vec4};

mod common;
use common::approx_eq16;

const EPS: f32 = 1e-6;

#[test]
fn mat4_mul_operator_matches_method() {
    let s = Mat4::scale(2.0, 3.0, 4.0);
    let id = Mat4::identity();
    approx_eq16((id * s).to_array(), id.multiply(&s).to_array(), EPS);
    approx_eq16((s * id).to_array(), s.multiply(&id).to_array(), EPS);
    approx_eq16((s * &id).to_array(), s.to_array(), EPS);
}

#[test]
fn mat4_mul_assign_variants_work() {
    use core::f32::consts::{FRAC_PI_3, FRAC_PI_4};
    // Owned rhs: rotation on the left, scale on the right
    let lhs_rot_x = Mat4::rotation_x(FRAC_PI_4);
    let rhs_scale = Mat4::scale(2.0, 3.0, 4.0);
    let expected_owned = (lhs_rot_x * rhs_scale).to_array();
    let mut a = lhs_rot_x;
    a *= rhs_scale;
    approx_eq16(a.to_array(), expected_owned, EPS);
    assert_ne!(a.to_array(), lhs_rot_x.to_array());

    // Borrowed rhs: rotation on the left, translation on the right
    let lhs_rot_y = Mat4::rotation_y(FRAC_PI_3);
    let rhs_trans = Mat4::translation(1.0, 2.0, 3.0);
    let expected_borrowed = (lhs_rot_y * rhs_trans).to_array();
    let mut b = lhs_rot_y;
    b *= &rhs_trans;
    approx_eq16(b.to_array(), expected_borrowed, EPS);
    assert_ne!(b.to_array(), lhs_rot_y.to_array());
}

#[test]
fn product_applies_right_operand_first() {
    // Scale then translate: the translation must not be scaled.
    let m = Mat4::translation(10.0, 0.0, 0.0) * Mat4::scale(2.0, 2.0, 2.0);
    let p = m.transform_point(&Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(p.to_array(), [12.0, 2.0, 2.0]);

    // Translate then scale: the translation is scaled too.
    let m = Mat4::scale(2.0, 2.0, 2.0) * Mat4::translation(10.0, 0.0, 0.0);
    let p = m.transform_point(&Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(p.to_array(), [22.0, 2.0, 2.0]);
}

#[test]
fn identity_multiply_is_noop() {
    let a = Mat4::from_row_major([
        1.0, 0.0, 0.0, 5.0, //
        0.0, 0.0, 1.0, -3.0, //
        0.0, -1.0, 0.0, 2.0, //
        0.0, 0.0, 0.0, 1.0,
    ]);
    let id = Mat4::identity();
    assert_eq!(a.multiply(&id).to_array(), a.to_array());
    assert_eq!(id.multiply(&a).to_array(), a.to_array());
}

#[test]
fn post_multiply_helpers_match_explicit_products() {
    let base = Mat4::translation(1.0, 2.0, 3.0);

    let mut m = base;
    m.rotate_z(0.5);
    approx_eq16(m.to_array(), (base * Mat4::rotation_z(0.5)).to_array(), EPS);

    let mut m = base;
    m.scale_by(2.0, 3.0, 4.0);
    approx_eq16(m.to_array(), (base * Mat4::scale(2.0, 3.0, 4.0)).to_array(), EPS);

    let mut m = base;
    m.scale_uniform(2.0);
    approx_eq16(m.to_array(), base.scaled(2.0, 2.0, 2.0).to_array(), EPS);

    let mut m = base;
    m.translate(-1.0, -2.0, -3.0);
    assert!(m.is_identity());

    let mut m = base;
    m.rotate_axis_angle(Vec3::UNIT_X, 0.25);
    approx_eq16(m.to_array(), base.rotated_x(0.25).to_array(), EPS);
}

#[test]
fn elementwise_add_and_subtract() {
    let a = Mat4::scale(1.0, 2.0, 3.0);
    let b = Mat4::translation(4.0, 5.0, 6.0);
    let sum = a + b;
    assert_eq!(sum.get(0, 0), 2.0);
    assert_eq!(sum.get(1, 1), 3.0);
    assert_eq!(sum.get(2, 3), 6.0);
    assert_eq!((sum - b).to_array(), a.to_array());

    let mut c = a;
    c += b;
    c -= a;
    assert_eq!(c.to_array(), b.to_array());
    assert_eq!((-c).get(0, 3), -4.0);
}

#[test]
fn scalar_multiply_and_vec4_product() {
    let m = Mat4::identity() * 2.0;
    let v = m * Vec4::new(1.0, 2.0, 3.0, 1.0);
    assert_eq!(v.to_array(), [2.0, 4.0, 6.0, 2.0]);

    let mut n = Mat4::identity();
    n *= 0.5;
    assert_eq!(n.multiply_scalar(2.0).to_array(), Mat4::IDENTITY.to_array());
}

#[test]
fn rotations_do_not_produce_negative_zero() {
    let angles = [
        0.0,
        core::f32::consts::FRAC_PI_2,
        core::f32::consts::PI,
        3.0 * core::f32::consts::FRAC_PI_2,
        2.0 * core::f32::consts::PI,
    ];
    let neg_zero = (-0.0f32).to_bits();
    for &a in &angles {
        for m in [
            Mat4::rotation_x(a),
            Mat4::rotation_y(a),
            Mat4::rotation_z(a),
        ] {
            for &e in &m.to_array() {
                assert_ne!(
                    e.to_bits(),
                    neg_zero,
                    "found -0.0 in rotation matrix for angle {a}"
                );
            }
        }
    }
}

#[test]
fn zero_angle_rotations_are_exact_identity() {
    assert!(Mat4::rotation_x(0.0).is_identity());
    assert!(Mat4::rotation_y(0.0).is_identity());
    assert!(Mat4::rotation_z(0.0).is_identity());
}
