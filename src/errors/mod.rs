pub mod types;

pub use types::OtesError;
