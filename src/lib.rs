// ALSI Mappings - Core Library
// Reference data for the GIE ALSI platform: countries, LNG system operators
// and terminals, with lookup by symbolic name or code.

pub mod entities;
pub mod error;
pub mod lookup;

// Re-export commonly used types
pub use entities::{
    Country, Company, Terminal,
    resolve_country, resolve_company, resolve_terminal,
};
pub use error::{MappingError, Result};
pub use lookup::{Entry, Lookup, Params, resolve};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
