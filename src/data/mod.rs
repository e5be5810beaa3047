mod reader;
mod sample;

pub use reader::DatasetReader;
pub use sample::Sample;
