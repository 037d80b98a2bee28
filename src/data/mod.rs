pub mod data_error;
pub mod dataset;
pub mod loader;
mod models;

pub use dataset::Dataset;
pub use loader::load_dataset;
