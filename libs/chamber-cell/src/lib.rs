pub mod actions;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use actions::*;
pub use error::*;
pub use models::*;
pub use repository::*;
pub use services::*;
