mod http_transport;
mod process_environment;

pub use http_transport::HttpTransport;
pub use process_environment::ProcessEnvironment;
