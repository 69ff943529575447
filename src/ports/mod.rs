mod environment;
mod transport;

pub use environment::Environment;
pub use transport::{Method, Response, Transport, TransportError};
