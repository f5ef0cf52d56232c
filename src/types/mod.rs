pub mod constant;
pub mod params;
