pub mod connection;
pub mod entries;
pub mod models;
pub mod runs;
pub mod setup;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
pub use models::*;
