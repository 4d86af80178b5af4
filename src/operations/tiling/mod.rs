mod frame;
mod tile_frames;

pub use frame::Frame;
pub use tile_frames::TileFrames;
