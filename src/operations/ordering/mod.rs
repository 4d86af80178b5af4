mod reading_order;
mod renumber_frames;

pub use reading_order::ReadingOrder;
pub use renumber_frames::RenumberFrames;
