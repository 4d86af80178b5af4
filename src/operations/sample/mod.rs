mod sample_path;

pub use sample_path::SamplePath;
