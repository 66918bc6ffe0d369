// Reference registries of the ALSI transparency platform
//
// Country ⊇ Company ⊇ Terminal: each level refers to the one above by code,
// and its query parameters extend the parameters of the level above.

pub mod country;
pub mod company;
pub mod terminal;

pub use country::{resolve_country, Country};
pub use company::{resolve_company, Company};
pub use terminal::{resolve_terminal, Terminal};
