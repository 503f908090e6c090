//! Forward kinematics for the lamp.
//!
//! The lamp is a chain of rotate-then-translate steps starting at the
//! world origin. [`compute_chain`] evaluates the whole chain once and
//! returns the frame of every segment plus the emitter, so the drawn
//! shade and the light inside it always come from the same matrices.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::constants::{
    BASE_HEIGHT, EMITTER_DEPTH, JOINT_RADIUS, LOWER_ARM_LENGTH, UPPER_ARM_LENGTH,
};
use crate::state::JointState;

/// World-space frames of every segment for one joint configuration.
///
/// Segment frames have their origin at the segment's pivot with the
/// segment extending along local +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LampPose {
    /// Base, spun about world up.
    pub base: Mat4,
    /// Lower arm, pivoting on top of the base.
    pub lower_arm: Mat4,
    /// Upper arm, pivoting at the end of the lower arm.
    pub upper_arm: Mat4,
    /// Lampshade joint after tilt and spin.
    pub lampshade: Mat4,
    /// Shade geometry frame: past the joint sphere, opening along local +Z.
    pub shade: Mat4,
    /// Light source inside the shade, shining along local +Z.
    pub emitter: Mat4,
}

impl LampPose {
    pub fn emitter_position(&self) -> Vec3 {
        self.emitter.w_axis.truncate()
    }

    /// Unit axis of the shade opening in world space.
    pub fn emitter_direction(&self) -> Vec3 {
        self.emitter.z_axis.truncate()
    }
}

/// Rotation that turns geometry built along +Z so it extends along +Y.
#[inline]
pub fn z_to_y() -> Mat4 {
    Mat4::from_rotation_x(-FRAC_PI_2)
}

#[inline]
fn rot_x(deg: f32) -> Mat4 {
    Mat4::from_rotation_x(deg.to_radians())
}

#[inline]
fn rot_y(deg: f32) -> Mat4 {
    Mat4::from_rotation_y(deg.to_radians())
}

#[inline]
fn up(distance: f32) -> Mat4 {
    Mat4::from_translation(Vec3::Y * distance)
}

pub fn compute_chain(joints: &JointState) -> LampPose {
    let base = rot_y(joints.base_rotation);
    let lower_arm = base * up(BASE_HEIGHT) * rot_x(joints.lower_arm_angle);
    let upper_arm = lower_arm * up(LOWER_ARM_LENGTH) * rot_x(joints.upper_arm_angle);
    let lampshade = upper_arm
        * up(UPPER_ARM_LENGTH)
        * rot_x(joints.lampshade_angle)
        * rot_y(joints.lampshade_rotation);
    let shade = lampshade * up(JOINT_RADIUS) * z_to_y();
    let emitter = shade * Mat4::from_translation(Vec3::Z * EMITTER_DEPTH);
    LampPose {
        base,
        lower_arm,
        upper_arm,
        lampshade,
        shade,
        emitter,
    }
}
