pub mod geometry;
pub mod map;
pub mod physics;
pub mod time;
pub mod world;
