// 🌍 Country Registry - countries reporting to the ALSI platform
//
// The symbolic name of a country is its two-letter code.

use crate::entities::{Company, Terminal};
use crate::lookup::{entry_impls, Params};

// ============================================================================
// COUNTRY
// ============================================================================

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Country {
    BE,
    DE,
    ES,
    FI,
    FR,
    GB,
    GR,
    HR,
    IT,
    LT,
    NL,
    PL,
    PT,
}

struct CountryRecord {
    country: Country,
    code: &'static str,
    full_name: &'static str,
}

const fn record(
    country: Country,
    code: &'static str,
    full_name: &'static str,
) -> CountryRecord {
    CountryRecord {
        country,
        code,
        full_name,
    }
}

/// Indexed by discriminant, so the order must follow the enum
static COUNTRIES: [CountryRecord; 13] = [
    record(Country::BE, "BE", "Belgium"),
    record(Country::DE, "DE", "Germany"),
    record(Country::ES, "ES", "Spain"),
    record(Country::FI, "FI", "Finland"),
    record(Country::FR, "FR", "France"),
    record(Country::GB, "GB", "Great Britain"),
    record(Country::GR, "GR", "Greece"),
    record(Country::HR, "HR", "Croatia"),
    record(Country::IT, "IT", "Italy"),
    record(Country::LT, "LT", "Lithuania"),
    record(Country::NL, "NL", "Netherlands"),
    record(Country::PL, "PL", "Poland"),
    record(Country::PT, "PT", "Portugal"),
];

impl Country {
    fn record(&self) -> &'static CountryRecord {
        &COUNTRIES[*self as usize]
    }

    /// All countries, in declaration order
    pub fn all() -> impl Iterator<Item = Country> {
        COUNTRIES.iter().map(|r| r.country)
    }

    /// Symbolic name, identical to the code
    pub fn name(&self) -> &'static str {
        self.record().code
    }

    pub fn code(&self) -> &'static str {
        self.record().code
    }

    pub fn full_name(&self) -> &'static str {
        self.record().full_name
    }

    /// Query parameters: `{"country": code}`
    pub fn get_params(&self) -> Params {
        Params::from([("country", self.code())])
    }

    /// Operators registered in this country
    pub fn companies(&self) -> Vec<Company> {
        Company::all()
            .filter(|c| c.country() == self.code())
            .collect()
    }

    /// Terminals located in this country
    pub fn terminals(&self) -> Vec<Terminal> {
        Terminal::all()
            .filter(|t| t.country() == self.code())
            .collect()
    }
}

entry_impls!(Country, "country", resolve_country);

// ============================================================================
// TESTS
// ============================================================================
