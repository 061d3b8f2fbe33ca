pub mod threat;
pub mod upload;

pub use threat::*;
pub use upload::*;
