pub mod scoring;

pub use scoring::predict_lung_disease;
