// Forward kinematics: emitter pose, co-location with the drawn shade and
// behaviour over the valid joint ranges.

use glam::{Mat4, Vec3};
use lamp_core::*;
use rand::prelude::*;

const EPS: f32 = 1e-4;

fn assert_vec_close(a: Vec3, b: Vec3) {
    assert!((a - b).length() <= EPS, "{a:?} != {b:?}");
}

fn random_pose(rng: &mut StdRng) -> JointState {
    JointState {
        base_rotation: rng.gen_range(-720.0..720.0),
        lower_arm_angle: rng.gen_range(LOWER_ARM_LIMITS.0..=LOWER_ARM_LIMITS.1),
        upper_arm_angle: rng.gen_range(UPPER_ARM_LIMITS.0..=UPPER_ARM_LIMITS.1),
        lampshade_angle: rng.gen_range(LAMPSHADE_LIMITS.0..=LAMPSHADE_LIMITS.1),
        lampshade_rotation: rng.gen_range(-720.0..720.0),
    }
}

/// Replays the chain one matrix-stack step at a time, the way a retained
/// transform stack would, to cross-check `compute_chain`.
fn stacked_emitter(j: &JointState) -> Mat4 {
    let steps = [
        Mat4::from_rotation_y(j.base_rotation.to_radians()),
        Mat4::from_translation(Vec3::new(0.0, BASE_HEIGHT, 0.0)),
        Mat4::from_rotation_x(j.lower_arm_angle.to_radians()),
        Mat4::from_translation(Vec3::new(0.0, LOWER_ARM_LENGTH, 0.0)),
        Mat4::from_rotation_x(j.upper_arm_angle.to_radians()),
        Mat4::from_translation(Vec3::new(0.0, UPPER_ARM_LENGTH, 0.0)),
        Mat4::from_rotation_x(j.lampshade_angle.to_radians()),
        Mat4::from_rotation_y(j.lampshade_rotation.to_radians()),
        Mat4::from_translation(Vec3::new(0.0, JOINT_RADIUS, 0.0)),
        Mat4::from_rotation_x((-90.0f32).to_radians()),
        Mat4::from_translation(Vec3::new(0.0, 0.0, EMITTER_DEPTH)),
    ];
    steps.iter().fold(Mat4::IDENTITY, |acc, m| acc * *m)
}

#[test]
fn straight_pose_points_emitter_up() {
    let pose = compute_chain(&JointState::new(0.0, 0.0, 0.0, 0.0, 0.0));
    let height =
        BASE_HEIGHT + LOWER_ARM_LENGTH + UPPER_ARM_LENGTH + JOINT_RADIUS + EMITTER_DEPTH;
    assert_vec_close(pose.emitter_position(), Vec3::new(0.0, height, 0.0));
    assert_vec_close(pose.emitter_direction(), Vec3::Y);
}

#[test]
fn lower_arm_at_ninety_lays_lamp_along_z() {
    let pose = compute_chain(&JointState::new(0.0, 90.0, 0.0, 0.0, 0.0));
    let reach = LOWER_ARM_LENGTH + UPPER_ARM_LENGTH + JOINT_RADIUS + EMITTER_DEPTH;
    assert_vec_close(pose.emitter_position(), Vec3::new(0.0, BASE_HEIGHT, reach));
    assert_vec_close(pose.emitter_direction(), Vec3::Z);
}

#[test]
fn base_rotation_swings_lamp_about_world_up() {
    let pose = compute_chain(&JointState::new(90.0, 90.0, 0.0, 0.0, 0.0));
    let reach = LOWER_ARM_LENGTH + UPPER_ARM_LENGTH + JOINT_RADIUS + EMITTER_DEPTH;
    assert_vec_close(pose.emitter_position(), Vec3::new(reach, BASE_HEIGHT, 0.0));
    assert_vec_close(pose.emitter_direction(), Vec3::X);
}

#[test]
fn segment_pivots_sit_at_arm_ends() {
    let pose = compute_chain(&JointState::default());
    let lower_end = pose.lower_arm.transform_point3(Vec3::Y * LOWER_ARM_LENGTH);
    let upper_end = pose.upper_arm.transform_point3(Vec3::Y * UPPER_ARM_LENGTH);
    assert_vec_close(pose.upper_arm.w_axis.truncate(), lower_end);
    assert_vec_close(pose.lampshade.w_axis.truncate(), upper_end);
    assert_vec_close(pose.lower_arm.w_axis.truncate(), Vec3::Y * BASE_HEIGHT);
}

#[test]
fn emitter_matches_step_by_step_stack() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let joints = random_pose(&mut rng);
        let pose = compute_chain(&joints);
        let expected = stacked_emitter(&joints);
        assert_vec_close(pose.emitter_position(), expected.w_axis.truncate());
        assert_vec_close(pose.emitter_direction(), expected.z_axis.truncate());
    }
}

#[test]
fn emitter_is_colocated_with_shade_frame() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..32 {
        let joints = random_pose(&mut rng);
        let pose = compute_chain(&joints);
        // Emitter lies on the shade axis, EMITTER_DEPTH into the shade.
        let on_axis = pose.shade.transform_point3(Vec3::Z * EMITTER_DEPTH);
        assert_vec_close(pose.emitter_position(), on_axis);
        // And points the same way the shade opens.
        assert_vec_close(pose.emitter_direction(), pose.shade.transform_vector3(Vec3::Z));
        // Seen from the lampshade joint, that axis is the joint's local +Y.
        let from_joint = pose
            .lampshade
            .transform_point3(Vec3::Y * (JOINT_RADIUS + EMITTER_DEPTH));
        assert_vec_close(pose.emitter_position(), from_joint);
    }
}

#[test]
fn chain_is_finite_over_valid_ranges() {
    let mut rng = StdRng::seed_from_u64(1234);
    let corners = [
        JointState::new(0.0, LOWER_ARM_LIMITS.0, UPPER_ARM_LIMITS.0, LAMPSHADE_LIMITS.0, 0.0),
        JointState::new(0.0, LOWER_ARM_LIMITS.1, UPPER_ARM_LIMITS.1, LAMPSHADE_LIMITS.1, 0.0),
        JointState::new(1e6, LOWER_ARM_LIMITS.1, UPPER_ARM_LIMITS.0, LAMPSHADE_LIMITS.1, -1e6),
    ];
    let samples = (0..200).map(|_| random_pose(&mut rng));
    for joints in corners.into_iter().chain(samples) {
        let pose = compute_chain(&joints);
        for m in [
            pose.base,
            pose.lower_arm,
            pose.upper_arm,
            pose.lampshade,
            pose.shade,
            pose.emitter,
        ] {
            assert!(m.is_finite(), "non-finite transform for {joints:?}");
        }
        assert!((pose.emitter_direction().length() - 1.0).abs() < EPS);
    }
}

#[test]
fn lampshade_spin_keeps_emitter_on_spin_axis() {
    // Spin is applied after tilt, about the shade's own axis, so the emitter
    // (which lies on that axis) does not move.
    let still = compute_chain(&JointState::new(10.0, 30.0, -40.0, -30.0, 0.0));
    let spun = compute_chain(&JointState::new(10.0, 30.0, -40.0, -30.0, 137.0));
    assert_vec_close(still.emitter_position(), spun.emitter_position());
    assert_vec_close(still.emitter_direction(), spun.emitter_direction());
}

/// Spot factor times distance attenuation at `point`, 0 outside the cone.
fn spot_intensity(spot: &Spotlight, point: Vec3) -> f32 {
    let to_point = point - spot.position;
    let dist = to_point.length();
    if dist <= f32::EPSILON {
        return 0.0;
    }
    let cos_angle = (to_point / dist).dot(spot.direction);
    if cos_angle < spot.cos_cutoff() {
        return 0.0;
    }
    let [c, l, q] = spot.attenuation;
    cos_angle.max(0.0).powf(spot.exponent) / (c + l * dist + q * dist * dist)
}

#[test]
fn spotlight_follows_emitter_and_lights_along_its_axis() {
    let pose = compute_chain(&JointState::default());
    let spot = Spotlight::from_pose(&pose);
    assert_vec_close(spot.position, pose.emitter_position());
    assert_vec_close(spot.direction, pose.emitter_direction());

    let ahead = spot.position + spot.direction * 2.0;
    let behind = spot.position - spot.direction * 2.0;
    assert!(spot_intensity(&spot, ahead) > 0.0);
    assert_eq!(spot_intensity(&spot, behind), 0.0);
}
