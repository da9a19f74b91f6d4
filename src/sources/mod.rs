// Product sources feeding the sync pipeline
pub mod json_file;

pub use json_file::JsonFileSource;
