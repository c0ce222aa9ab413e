//! Chain node layer
//!
//! WebSocket connection to the node, wallet handshake state and block polling.

pub mod connection;
pub mod watcher;

pub use connection::{BlockSource, ChainConnection, ChainInfo, ConnectionError, NodeClient};
pub use watcher::BlockWatcher;
