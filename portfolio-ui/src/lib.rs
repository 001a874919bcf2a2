pub mod config;
pub mod interop;
pub mod page;

pub use config::site_config;
pub use interop::*;
pub use page::*;
