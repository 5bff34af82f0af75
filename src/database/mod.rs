pub mod connection;
pub mod matches;
pub mod models;
pub mod players;
pub mod setup;
pub mod standings;

pub use connection::{
    create_memory_pool, create_pool, get_connection, DbConn, DbPool, DEFAULT_CHECKOUT_TIMEOUT,
    MEMORY_DATABASE,
};
pub use models::*;
