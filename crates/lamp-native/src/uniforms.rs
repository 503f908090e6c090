use glam::Mat4;
use lamp_core::{DrawCall, Frame, Shading};

// Layouts mirror the `Globals` and `Draw` structs in scene.wgsl.

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    fill_dir: [f32; 4],
    fill_terms: [f32; 4],
    spot_pos: [f32; 4],
    spot_dir: [f32; 4],
    spot_diffuse: [f32; 4],
    spot_specular: [f32; 4],
    spot_atten: [f32; 4],
}

impl GlobalUniforms {
    pub fn from_frame(frame: &Frame) -> Self {
        let lights = &frame.lights;
        let fill = &lights.fill;
        let mut u = Self {
            view_proj: frame.view_proj.to_cols_array_2d(),
            eye: frame.eye.extend(1.0).to_array(),
            fill_dir: fill.direction.extend(0.0).to_array(),
            fill_terms: [fill.ambient, fill.diffuse, lights.global_ambient, fill.specular],
            spot_pos: [0.0; 4],
            spot_dir: [0.0; 4],
            spot_diffuse: [0.0; 4],
            spot_specular: [0.0; 4],
            spot_atten: [1.0, 0.0, 0.0, 0.0],
        };
        if let Some(spot) = &lights.spot {
            let [dr, dg, db] = spot.diffuse;
            let [sr, sg, sb] = spot.specular;
            let [c, l, q] = spot.attenuation;
            u.spot_pos = spot.position.extend(1.0).to_array();
            u.spot_dir = spot.direction.extend(spot.cos_cutoff()).to_array();
            u.spot_diffuse = [dr, dg, db, spot.exponent];
            u.spot_specular = [sr, sg, sb, 1.0];
            u.spot_atten = [c, l, q, 0.0];
        }
        u
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DrawUniforms {
    model: [[f32; 4]; 4],
    normal_mat: [[f32; 4]; 4],
    color: [f32; 4],
    specular: [f32; 4],
    params: [f32; 4],
}

impl DrawUniforms {
    pub fn from_draw(draw: &DrawCall) -> Self {
        let normal_mat = normal_matrix(draw.model);
        let (color, specular, lit) = match draw.shading {
            Shading::Lit(m) => {
                let [r, g, b, _] = m.specular;
                (m.ambient_diffuse, [r, g, b, m.shininess], 1.0)
            }
            Shading::Unlit { color } => (color, [0.0; 4], 0.0),
        };
        Self {
            model: draw.model.to_cols_array_2d(),
            normal_mat: normal_mat.to_cols_array_2d(),
            color,
            specular,
            params: [lit, 0.0, 0.0, 0.0],
        }
    }
}

/// Inverse transpose of `model`, so normals stay perpendicular under
/// non-uniform scale. A singular model yields the identity.
pub fn normal_matrix(model: Mat4) -> Mat4 {
    let det = model.determinant();
    if det.abs() <= f32::EPSILON || !det.is_finite() {
        return Mat4::IDENTITY;
    }
    model.inverse().transpose()
}

/// Round `size` up to the next multiple of `align` (a power of two).
#[inline]
pub fn align_to(size: u64, align: u64) -> u64 {
    (size + align - 1) & !(align - 1)
}
