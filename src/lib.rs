pub mod scene;
pub mod scene_loader;
pub mod shaders;
