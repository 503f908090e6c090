use anyhow::Context;
use lamp_core::MeshKey;
use wgpu::util::DeviceExt;

pub struct IndexBuffer {
    pub buffer: wgpu::Buffer,
    pub count: u32,
}

/// One procedural mesh resident on the GPU.
pub struct GpuMesh {
    pub vertices: wgpu::Buffer,
    pub triangles: Option<IndexBuffer>,
    pub lines: Option<IndexBuffer>,
}

fn index_buffer(device: &wgpu::Device, label: &str, indices: &[u32]) -> Option<IndexBuffer> {
    if indices.is_empty() {
        return None;
    }
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents: bytemuck::cast_slice(indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    Some(IndexBuffer {
        buffer,
        count: indices.len() as u32,
    })
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, key: MeshKey) -> anyhow::Result<Self> {
        let mesh = key
            .build()
            .with_context(|| format!("building {key:?} mesh"))?;
        let indexed = mesh.to_indexed();
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vb"),
            contents: bytemuck::cast_slice(&indexed.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Ok(Self {
            vertices,
            triangles: index_buffer(device, "mesh_tri_ib", &indexed.triangles),
            lines: index_buffer(device, "mesh_line_ib", &indexed.lines),
        })
    }
}

/// All scene meshes, indexed by [`MeshKey::index`].
pub struct MeshLibrary {
    meshes: Vec<GpuMesh>,
}

impl MeshLibrary {
    pub fn build(device: &wgpu::Device) -> anyhow::Result<Self> {
        let meshes = MeshKey::ALL
            .iter()
            .map(|&key| GpuMesh::upload(device, key))
            .collect::<anyhow::Result<Vec<_>>>()?;
        log::debug!("uploaded {} meshes", meshes.len());
        Ok(Self { meshes })
    }

    pub fn get(&self, key: MeshKey) -> &GpuMesh {
        &self.meshes[key.index()]
    }
}
