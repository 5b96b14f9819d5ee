pub mod animation;
pub mod behavior;
pub mod combat;
pub mod control;
pub mod death;
pub mod entity;
pub mod health;
pub mod sound;
pub mod template;
