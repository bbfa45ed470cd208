// Business logic services

pub mod error;
pub mod gym_service;

pub use error::GymError;
pub use gym_service::GymService;
