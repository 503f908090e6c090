//! Interactive lamp state shared with the native frontend.
//!
//! These types avoid platform APIs. A single owner holds an [`AppState`],
//! feeds it [`Command`]s from the input layer and reads it back once per
//! frame to compose the scene.

use glam::{Mat4, Vec3};
use log::{debug, info};

use crate::constants::*;
use crate::input::Command;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Viewer placed on a sphere around a fixed target.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub azimuth_deg: f32,
    pub elevation_deg: f32,
    pub distance: f32,
    pub target: Vec3,
    pub aspect: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth_deg: CAMERA_AZIMUTH_DEG,
            elevation_deg: CAMERA_ELEVATION_DEG,
            distance: CAMERA_DISTANCE,
            target: camera_target_vec3(),
            aspect: WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32,
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> Vec3 {
        let (sin_az, cos_az) = self.azimuth_deg.to_radians().sin_cos();
        let (sin_el, cos_el) = self.elevation_deg.to_radians().sin_cos();
        Vec3::new(
            self.distance * cos_el * sin_az,
            self.distance * sin_el,
            self.distance * cos_el * cos_az,
        )
    }

    /// Recompute the aspect ratio for a new surface size.
    ///
    /// A zero dimension (minimised window) is treated as 1 pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: self.aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn view_proj(&self) -> Mat4 {
        let cam = self.camera();
        cam.projection_matrix() * cam.view_matrix()
    }
}

/// The joint that responds to directional input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Joint {
    #[default]
    Base,
    LowerArm,
    UpperArm,
    Lampshade,
}

impl Joint {
    pub const ALL: [Joint; 4] = [
        Joint::Base,
        Joint::LowerArm,
        Joint::UpperArm,
        Joint::Lampshade,
    ];

    /// Joint for a 1-based selection number, as printed on the number keys.
    pub fn from_number(n: u32) -> Option<Joint> {
        match n {
            1..=4 => Some(Self::ALL[n as usize - 1]),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Joint::Base => "Base",
            Joint::LowerArm => "Lower Arm",
            Joint::UpperArm => "Upper Arm",
            Joint::Lampshade => "Lampshade",
        }
    }

    pub fn binding(self) -> JointBinding {
        JOINT_BINDINGS[self as usize]
    }
}

/// One scalar degree of freedom of the lamp, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dof {
    BaseRotation,
    LowerArmAngle,
    UpperArmAngle,
    LampshadeAngle,
    LampshadeRotation,
}

impl Dof {
    /// Inclusive `(min, max)` range, or `None` for free spins.
    pub fn limits(self) -> Option<(f32, f32)> {
        match self {
            Dof::BaseRotation | Dof::LampshadeRotation => None,
            Dof::LowerArmAngle => Some(LOWER_ARM_LIMITS),
            Dof::UpperArmAngle => Some(UPPER_ARM_LIMITS),
            Dof::LampshadeAngle => Some(LAMPSHADE_LIMITS),
        }
    }

    pub fn clamp(self, value: f32) -> f32 {
        match self.limits() {
            Some((lo, hi)) => value.clamp(lo, hi),
            None => value,
        }
    }
}

/// Which degree of freedom each input axis drives for a joint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JointBinding {
    /// Driven by Up/Down (tilt).
    pub vertical: Option<Dof>,
    /// Driven by Left/Right (spin).
    pub horizontal: Option<Dof>,
}

const JOINT_BINDINGS: [JointBinding; 4] = [
    // Base
    JointBinding {
        vertical: None,
        horizontal: Some(Dof::BaseRotation),
    },
    // LowerArm
    JointBinding {
        vertical: Some(Dof::LowerArmAngle),
        horizontal: None,
    },
    // UpperArm
    JointBinding {
        vertical: Some(Dof::UpperArmAngle),
        horizontal: None,
    },
    // Lampshade
    JointBinding {
        vertical: Some(Dof::LampshadeAngle),
        horizontal: Some(Dof::LampshadeRotation),
    },
];

/// Directional input. Up and Right increase the driven angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Up | Direction::Right => 1.0,
            Direction::Down | Direction::Left => -1.0,
        }
    }

    /// The degree of freedom this direction drives under `binding`, if any.
    pub fn target(self, binding: JointBinding) -> Option<Dof> {
        match self {
            Direction::Up | Direction::Down => binding.vertical,
            Direction::Left | Direction::Right => binding.horizontal,
        }
    }
}

/// Joint angles in degrees. Spins are unbounded; tilts stay within [`Dof::limits`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointState {
    pub base_rotation: f32,
    pub lower_arm_angle: f32,
    pub upper_arm_angle: f32,
    pub lampshade_angle: f32,
    pub lampshade_rotation: f32,
}

impl Default for JointState {
    fn default() -> Self {
        let [base, lower, upper, tilt, spin] = DEFAULT_POSE;
        Self {
            base_rotation: base,
            lower_arm_angle: lower,
            upper_arm_angle: upper,
            lampshade_angle: tilt,
            lampshade_rotation: spin,
        }
    }
}

impl JointState {
    /// Build a pose, clamping the tilt angles into range.
    pub fn new(
        base_rotation: f32,
        lower_arm_angle: f32,
        upper_arm_angle: f32,
        lampshade_angle: f32,
        lampshade_rotation: f32,
    ) -> Self {
        Self {
            base_rotation,
            lower_arm_angle: Dof::LowerArmAngle.clamp(lower_arm_angle),
            upper_arm_angle: Dof::UpperArmAngle.clamp(upper_arm_angle),
            lampshade_angle: Dof::LampshadeAngle.clamp(lampshade_angle),
            lampshade_rotation,
        }
    }

    pub fn get(&self, dof: Dof) -> f32 {
        match dof {
            Dof::BaseRotation => self.base_rotation,
            Dof::LowerArmAngle => self.lower_arm_angle,
            Dof::UpperArmAngle => self.upper_arm_angle,
            Dof::LampshadeAngle => self.lampshade_angle,
            Dof::LampshadeRotation => self.lampshade_rotation,
        }
    }

    fn slot_mut(&mut self, dof: Dof) -> &mut f32 {
        match dof {
            Dof::BaseRotation => &mut self.base_rotation,
            Dof::LowerArmAngle => &mut self.lower_arm_angle,
            Dof::UpperArmAngle => &mut self.upper_arm_angle,
            Dof::LampshadeAngle => &mut self.lampshade_angle,
            Dof::LampshadeRotation => &mut self.lampshade_rotation,
        }
    }

    /// Set `dof`, clamped to its range. Returns the stored value.
    pub fn set(&mut self, dof: Dof, value: f32) -> f32 {
        let slot = self.slot_mut(dof);
        *slot = dof.clamp(value);
        *slot
    }

    /// Add `delta` to `dof`, clamped to its range. Returns the stored value.
    pub fn adjust(&mut self, dof: Dof, delta: f32) -> f32 {
        let wanted = self.get(dof) + delta;
        let stored = self.set(dof, wanted);
        if stored != wanted {
            debug!("{dof:?} held at limit {stored}");
        }
        stored
    }
}

/// What the frontend should do after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Redraw,
    Quit,
}

/// Everything the renderer reads each frame.
#[derive(Clone, Debug)]
pub struct AppState {
    pub joints: JointState,
    pub selected: Joint,
    pub spotlight_enabled: bool,
    pub camera: OrbitCamera,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            joints: JointState::default(),
            selected: Joint::Base,
            spotlight_enabled: true,
            camera: OrbitCamera::default(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_joint(&mut self, joint: Joint) {
        self.selected = joint;
        info!("Selected: {}", joint.name());
    }

    /// Step the selected joint's angle for `direction` by [`ROTATION_STEP_DEG`].
    ///
    /// Returns `false` when the selected joint has no degree of freedom on
    /// that axis (e.g. Up on the base) or the angle is already at its limit.
    pub fn adjust_joint(&mut self, direction: Direction) -> bool {
        let Some(dof) = direction.target(self.selected.binding()) else {
            return false;
        };
        let before = self.joints.get(dof);
        let after = self
            .joints
            .adjust(dof, direction.sign() * ROTATION_STEP_DEG);
        after != before
    }

    pub fn toggle_spotlight(&mut self) -> bool {
        self.spotlight_enabled = !self.spotlight_enabled;
        info!(
            "Spotlight: {}",
            if self.spotlight_enabled { "ON" } else { "OFF" }
        );
        self.spotlight_enabled
    }

    /// Restore the default pose. Selection and the spotlight toggle are kept.
    pub fn reset_pose(&mut self) {
        self.joints = JointState::default();
        info!("Reset to default position");
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::SelectJoint(joint) => self.select_joint(joint),
            Command::Adjust(direction) => {
                self.adjust_joint(direction);
            }
            Command::ToggleSpotlight => {
                self.toggle_spotlight();
            }
            Command::ResetPose => self.reset_pose(),
            Command::Quit => return Outcome::Quit,
        }
        Outcome::Redraw
    }

    /// One-line summary for a title bar or overlay.
    pub fn status_line(&self) -> String {
        format!(
            "Selected Joint: {} | Spotlight: {}",
            self.selected.name(),
            if self.spotlight_enabled { "ON" } else { "OFF" }
        )
    }
}
