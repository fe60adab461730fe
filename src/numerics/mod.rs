pub mod lie;
pub mod pose;
