use crate::assets::Banner;
use crate::data::Dataset;

/// Shared, read-only resources handed to every request.
#[derive(Debug)]
pub struct AppState {
    pub dataset: Dataset,
    pub banner: Banner,
}

impl AppState {
    pub fn new(dataset: Dataset, banner: Banner) -> Self {
        Self { dataset, banner }
    }
}
