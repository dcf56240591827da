// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! rocket-math: column-major 4×4 transform matrices for 3D engines.
//!
//! The crate centres on [`Mat4`]: factory constructors for view, projection,
//! billboard, reflection, rotation, scale and translation matrices, the usual
//! algebra (elementwise ops, multiply, transpose), cofactor inversion and
//! decomposition back into a [`Transform`] (scale, rotation, translation).
//!
//! Small collaborator value types ([`Vec3`], [`Vec4`], [`Quat`], [`Plane`])
//! live alongside it in [`math`].
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::similar_names,
    clippy::float_cmp,
    clippy::module_name_repetitions
)]

pub mod math;

mod error;
mod transform;

// Re-exports for stable public API
pub use error::MatrixError;
pub use math::{Mat4, Plane, Quat, Vec3, Vec4};
pub use transform::Transform;
