pub mod constants;
pub mod geometry;
pub mod input;
pub mod kinematics;
pub mod lighting;
pub mod scene;
pub mod state;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use constants::*;
pub use geometry::{GeometryError, IndexedMesh, Mesh, Primitive, Topology, Vertex};
pub use input::*;
pub use kinematics::*;
pub use lighting::*;
pub use scene::*;
pub use state::*;
