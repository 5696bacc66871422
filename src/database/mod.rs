mod connection;

pub use connection::{check_health, connect_options, create_pool};
