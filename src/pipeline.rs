pub mod draw;
pub mod lighting;
pub mod preview;
pub mod shaders;
pub mod uniforms;
