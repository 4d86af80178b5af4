pub mod centerline;
pub mod pline;

pub use centerline::{ArcEntity, CenterlineGeometry};
pub use pline::{Pline, PlineVertex};
