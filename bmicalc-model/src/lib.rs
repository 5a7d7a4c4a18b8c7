pub mod bmi;
pub mod energy;
pub mod error;
pub mod user;

pub use error::{Error, Result};
