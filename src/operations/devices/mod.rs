mod classify;
mod device;
mod draw_legends;
mod extract_devices;
mod leader;
mod project_devices;
mod rotation;

pub use classify::{ChainageRange, Classifier};
pub use device::{Device, PointFeature};
pub use draw_legends::{DrawLegends, LegendSummary};
pub use extract_devices::ExtractDevices;
pub use leader::{Leader, LeaderStyle};
pub use project_devices::ProjectDevices;
pub use rotation::{RotationLookup, RotationResolver, RotationSource};
