pub mod dialect;
pub mod escape;
pub mod renderer;
