//! Connection check handler.

mod test_connection;

pub use test_connection::TestConnectionHandler;
