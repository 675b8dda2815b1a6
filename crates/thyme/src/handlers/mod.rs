pub mod error;
pub mod health;
pub mod recipes;
pub mod tables;

pub use error::AppError;
