pub mod centerline;
pub mod devices;
pub mod ordering;
pub mod plot;
pub mod sample;
pub mod tiling;
