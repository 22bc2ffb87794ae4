pub mod classification;
pub mod climate;
pub mod environment;

pub use classification::ClassificationModule;
pub use climate::ClimateModule;
pub use environment::EnvironmentModule;
