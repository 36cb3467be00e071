mod constants;
mod resolver;
mod service;

pub use constants::*;
pub use resolver::{resolve_service_url, resolve_service_urls};
pub use service::AstarteService;
