pub mod config;
pub mod db;
pub mod error;

pub use config::Config;
pub use db::ConnectionManager;
pub use error::DbError;
