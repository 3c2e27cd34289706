pub mod bodies;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod ephemeris;
pub mod kepler;
pub mod observer;
pub mod orbital_elements;
pub mod projection;
pub mod ref_system;
pub mod rise_set;
pub mod sky_map;
pub mod skymap_errors;
pub mod solar_system;
pub mod time;
