//! Frame composition: turns [`AppState`] into an ordered draw list.
//!
//! Draws reference meshes by [`MeshKey`] so a renderer can build each mesh
//! once and reuse it; only transforms and shading change between frames.

use glam::{Mat4, Vec3};

use crate::constants::*;
use crate::geometry::{self, GeometryError, Mesh};
use crate::kinematics::{compute_chain, z_to_y, LampPose};
use crate::lighting::{LightRig, Material, Shading};
use crate::state::{AppState, Joint};

/// Every distinct mesh the scene draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshKey {
    Table,
    BaseSide,
    BaseCap,
    JointSphere,
    LowerArm,
    UpperArm,
    ShadeCone,
    ShadeCap,
    Glow,
    HighlightCube,
    HighlightSphere,
}

impl MeshKey {
    pub const ALL: [MeshKey; 11] = [
        MeshKey::Table,
        MeshKey::BaseSide,
        MeshKey::BaseCap,
        MeshKey::JointSphere,
        MeshKey::LowerArm,
        MeshKey::UpperArm,
        MeshKey::ShadeCone,
        MeshKey::ShadeCap,
        MeshKey::Glow,
        MeshKey::HighlightCube,
        MeshKey::HighlightSphere,
    ];

    /// Position in [`MeshKey::ALL`], usable as a dense table index.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn build(self) -> Result<Mesh, GeometryError> {
        match self {
            MeshKey::Table => geometry::table_grid(TABLE_HALF_EXTENT, TABLE_STEP),
            MeshKey::BaseSide => geometry::cylinder(BASE_RADIUS, BASE_HEIGHT, BASE_SLICES),
            MeshKey::BaseCap => geometry::disk(0.0, BASE_RADIUS, BASE_SLICES),
            MeshKey::JointSphere => geometry::uv_sphere(JOINT_RADIUS, JOINT_SLICES, JOINT_STACKS),
            MeshKey::LowerArm => geometry::cylinder(ARM_RADIUS, LOWER_ARM_LENGTH, ARM_SLICES),
            MeshKey::UpperArm => geometry::cylinder(ARM_RADIUS, UPPER_ARM_LENGTH, ARM_SLICES),
            MeshKey::ShadeCone => geometry::cone(
                SHADE_NECK_RADIUS,
                LAMPSHADE_RADIUS,
                LAMPSHADE_HEIGHT,
                SHADE_SLICES,
            ),
            MeshKey::ShadeCap => geometry::disk(0.0, SHADE_NECK_RADIUS, SHADE_SLICES),
            MeshKey::Glow => geometry::disk(0.0, GLOW_RADIUS, SHADE_SLICES),
            MeshKey::HighlightCube => geometry::wire_cube(HIGHLIGHT_CUBE_SIZE),
            MeshKey::HighlightSphere => geometry::wire_sphere(
                HIGHLIGHT_SPHERE_RADIUS,
                HIGHLIGHT_SLICES,
                HIGHLIGHT_STACKS,
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCall {
    pub mesh: MeshKey,
    /// Local-to-world transform.
    pub model: Mat4,
    pub shading: Shading,
}

/// Everything needed to render one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub draws: Vec<DrawCall>,
    pub lights: LightRig,
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub pose: LampPose,
}

struct DrawList {
    draws: Vec<DrawCall>,
}

impl DrawList {
    fn lit(&mut self, mesh: MeshKey, model: Mat4, material: Material) {
        self.draws.push(DrawCall {
            mesh,
            model,
            shading: Shading::Lit(material),
        });
    }

    fn unlit(&mut self, mesh: MeshKey, model: Mat4, color: [f32; 4]) {
        self.draws.push(DrawCall {
            mesh,
            model,
            shading: Shading::Unlit { color },
        });
    }

    fn highlight(&mut self, mesh: MeshKey, model: Mat4) {
        self.unlit(mesh, model, HIGHLIGHT_COLOR);
    }
}

pub fn compose_frame(state: &AppState) -> Frame {
    let pose = compute_chain(&state.joints);
    let selected = state.selected;
    let upright = z_to_y();
    let mut list = DrawList {
        draws: Vec::with_capacity(16),
    };

    list.lit(
        MeshKey::Table,
        Mat4::from_translation(Vec3::Y * TABLE_Y),
        TABLE_MATERIAL,
    );

    // Base
    if selected == Joint::Base {
        list.highlight(
            MeshKey::HighlightCube,
            pose.base * Mat4::from_translation(Vec3::Y * (BASE_HEIGHT * 0.5)),
        );
    }
    list.lit(MeshKey::BaseSide, pose.base * upright, BASE_MATERIAL);
    list.lit(
        MeshKey::BaseCap,
        pose.base * upright * Mat4::from_translation(Vec3::Z * BASE_HEIGHT),
        BASE_MATERIAL,
    );

    // Arms, each starting at a joint sphere
    for (joint, frame, mesh) in [
        (Joint::LowerArm, pose.lower_arm, MeshKey::LowerArm),
        (Joint::UpperArm, pose.upper_arm, MeshKey::UpperArm),
    ] {
        if selected == joint {
            list.highlight(MeshKey::HighlightSphere, frame);
        }
        list.lit(MeshKey::JointSphere, frame, JOINT_MATERIAL);
        list.lit(mesh, frame * upright, ARM_MATERIAL);
    }

    // Lampshade
    if selected == Joint::Lampshade {
        list.highlight(MeshKey::HighlightSphere, pose.lampshade);
    }
    list.lit(MeshKey::JointSphere, pose.lampshade, JOINT_MATERIAL);
    list.lit(MeshKey::ShadeCone, pose.shade, SHADE_MATERIAL);
    list.lit(MeshKey::ShadeCap, pose.shade, SHADE_MATERIAL);
    if state.spotlight_enabled {
        // Last so it blends over the inside of the shade.
        list.unlit(
            MeshKey::Glow,
            pose.shade * Mat4::from_translation(Vec3::Z * LAMPSHADE_HEIGHT),
            GLOW_COLOR,
        );
    }

    Frame {
        draws: list.draws,
        lights: LightRig::new(&pose, state.spotlight_enabled),
        view_proj: state.camera.view_proj(),
        eye: state.camera.eye(),
        pose,
    }
}
