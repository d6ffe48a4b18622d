//! Model Adapters - pretrained clustering artifacts on the local filesystem.

mod centroid_model;

pub use centroid_model::{CentroidClusterModel, FileModelRepository};
