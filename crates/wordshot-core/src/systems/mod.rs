pub mod movement;
pub mod picking;
pub mod render;
pub mod spawner;
pub mod words;
