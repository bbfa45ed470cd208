// Data models and request/response types

pub mod access_log;
pub mod device;
pub mod gym_class;
pub mod member;
pub mod progress;
pub mod routine;
pub mod trainer;

pub use access_log::*;
pub use device::*;
pub use gym_class::*;
pub use member::*;
pub use progress::*;
pub use routine::*;
pub use trainer::*;
