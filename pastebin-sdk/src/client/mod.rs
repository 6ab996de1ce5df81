pub mod core;
pub mod form;
mod http;
pub mod transport;
