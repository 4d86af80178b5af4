mod find_centerline;

pub use find_centerline::FindCenterline;
