// Product Q&A - API Core
//
// Thin HTTP and CLI layer over the product_qa engine: environment
// configuration, engine construction, and the Axum router.

pub mod config;
pub mod kernel;
pub mod server;

pub use config::*;
