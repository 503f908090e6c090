//! Light and material descriptions consumed by the renderer.
//!
//! The shading model follows classic fixed-function lighting: a global
//! ambient term, a weak directional fill light and an attenuated spotlight
//! with a hard cutoff and an exponent falloff. Both lights contribute a
//! Blinn specular term.

use glam::Vec3;

use crate::constants::*;
use crate::kinematics::LampPose;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient_diffuse: [f32; 4],
    pub specular: [f32; 4],
    pub shininess: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shading {
    Lit(Material),
    /// Flat colour, ignores every light.
    Unlit { color: [f32; 4] },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillLight {
    /// Unit vector pointing towards the light.
    pub direction: Vec3,
    pub ambient: f32,
    pub diffuse: f32,
    pub specular: f32,
}

impl Default for FillLight {
    fn default() -> Self {
        Self {
            direction: fill_light_direction(),
            ambient: FILL_AMBIENT,
            diffuse: FILL_DIFFUSE,
            specular: FILL_SPECULAR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spotlight {
    pub position: Vec3,
    /// Unit vector along the beam axis.
    pub direction: Vec3,
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub cutoff_deg: f32,
    pub exponent: f32,
    /// Constant, linear and quadratic distance attenuation.
    pub attenuation: [f32; 3],
}

impl Spotlight {
    /// Spotlight sitting at the emitter of `pose`.
    pub fn from_pose(pose: &LampPose) -> Self {
        Self {
            position: pose.emitter_position(),
            direction: pose.emitter_direction().normalize_or_zero(),
            diffuse: SPOT_DIFFUSE,
            specular: SPOT_SPECULAR,
            cutoff_deg: SPOT_CUTOFF_DEG,
            exponent: SPOT_EXPONENT,
            attenuation: SPOT_ATTENUATION,
        }
    }

    pub fn cos_cutoff(&self) -> f32 {
        self.cutoff_deg.to_radians().cos()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRig {
    pub global_ambient: f32,
    pub fill: FillLight,
    /// `None` while the spotlight is switched off.
    pub spot: Option<Spotlight>,
}

impl LightRig {
    pub fn new(pose: &LampPose, spotlight_enabled: bool) -> Self {
        Self {
            global_ambient: GLOBAL_AMBIENT,
            fill: FillLight::default(),
            spot: spotlight_enabled.then(|| Spotlight::from_pose(pose)),
        }
    }
}
