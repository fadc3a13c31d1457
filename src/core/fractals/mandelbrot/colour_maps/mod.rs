pub mod factory;
pub mod fire_gradient;
pub mod hue_cycle;
