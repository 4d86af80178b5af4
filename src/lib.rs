//! Linear referencing and sheet tiling for road plan drawings.

pub mod chainage;
pub mod config;
pub mod document;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod route;
pub mod table;

pub use error::{Result, RoadplotError};
