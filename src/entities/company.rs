// 🏭 Company Registry - LNG System Operators (LSOs)
//
// Each operator is identified by its EIC party code and belongs to exactly
// one country. The country is stored as a code and resolved on demand.

use crate::entities::{resolve_country, Country, Terminal};
use crate::error::MappingError;
use crate::lookup::{entry_impls, Params};

// ============================================================================
// COMPANY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Company {
    FluxysLng,
    RweSupplyTrading,
    DeutscheEnergyTerminal,
    DeutscheRegas,
    Bbg,
    EnagasTransporte,
    Saggas,
    Reganosa,
    AllSpanishTerminals,
    Musel,
    Hamina,
    FloatingLngTerminalFinland,
    Elengy,
    DunkerqueLng,
    FosmaxLng,
    TotalenergiesLng,
    NationalGridGrainLng,
    SouthHookLng,
    Desfa,
    Gastrade,
    LngCroatia,
    GnlItalia,
    OltOffshoreLngToscana,
    AdriaticLng,
    SnamFsru,
    KlaipedosNafta,
    GateTerminal,
    EemsEnergy,
    GazSystem,
    RenAtlantico,
}

struct CompanyRecord {
    company: Company,
    name: &'static str,
    code: &'static str,
    country: &'static str,
}

const fn record(
    company: Company,
    name: &'static str,
    code: &'static str,
    country: &'static str,
) -> CompanyRecord {
    CompanyRecord {
        company,
        name,
        code,
        country,
    }
}

/// Indexed by discriminant, so the order must follow the enum
static COMPANIES: [CompanyRecord; 30] = [
    record(Company::FluxysLng, "fluxys_lng", "21X000000001006T", "BE"),
    record(
        Company::RweSupplyTrading,
        "rwe_supply_trading",
        "11XRWETRADING--0",
        "DE",
    ),
    record(
        Company::DeutscheEnergyTerminal,
        "deutsche_energy_terminal",
        "21X000000001403J",
        "DE",
    ),
    record(
        Company::DeutscheRegas,
        "deutsche_regas",
        "37X000000000265F",
        "DE",
    ),
    record(Company::Bbg, "bbg", "21X000000001352A", "ES"),
    record(
        Company::EnagasTransporte,
        "enagas_transporte",
        "21X000000001254A",
        "ES",
    ),
    record(Company::Saggas, "saggas", "18XTGPRS-12345-G", "ES"),
    record(Company::Reganosa, "reganosa", "18XRGNSA-12345-V", "ES"),
    record(
        Company::AllSpanishTerminals,
        "all_spanish_terminals",
        "21X0000000013368",
        "ES",
    ),
    record(Company::Musel, "musel", "21X000000000134P", "ES"),
    record(Company::Hamina, "hamina", "66X-00000000024H", "FI"),
    record(
        Company::FloatingLngTerminalFinland,
        "floating_lng_terminal_finland",
        "66X000000000027Z",
        "FI",
    ),
    record(Company::Elengy, "elengy", "21X0000000010679", "FR"),
    record(
        Company::DunkerqueLng,
        "dunkerque_lng",
        "21X000000001331I",
        "FR",
    ),
    record(Company::FosmaxLng, "fosmax_lng", "21X000000001070K", "FR"),
    record(
        Company::TotalenergiesLng,
        "totalenergies_lng",
        "63X218318139939Y",
        "FR",
    ),
    record(
        Company::NationalGridGrainLng,
        "national_grid_grain_lng",
        "21X-GB-A-A0A0A-7",
        "GB",
    ),
    record(
        Company::SouthHookLng,
        "south_hook_lng",
        "21X0000000013554",
        "GB",
    ),
    record(Company::Desfa, "desfa", "21X-GR-A-A0A0A-G", "GR"),
    record(Company::Gastrade, "gastrade", "21X738265265081N", "GR"),
    record(Company::LngCroatia, "lng_croatia", "31X-LNG-HR-----7", "HR"),
    record(Company::GnlItalia, "gnl_italia", "26X00000117915-0", "IT"),
    record(
        Company::OltOffshoreLngToscana,
        "olt_offshore_lng_toscana",
        "21X000000001109G",
        "IT",
    ),
    record(
        Company::AdriaticLng,
        "adriatic_lng",
        "21X000000001360B",
        "IT",
    ),
    record(Company::SnamFsru, "snam_fsru", "59XFSRUITALIASTY", "IT"),
    record(
        Company::KlaipedosNafta,
        "klaipedos_nafta",
        "21X0000000013740",
        "LT",
    ),
    record(
        Company::GateTerminal,
        "gate_terminal",
        "21X000000001063H",
        "NL",
    ),
    record(Company::EemsEnergy, "eems_energy", "52X000000000088H", "NL"),
    record(Company::GazSystem, "gaz_system", "21X-PL-A-A0A0A-B", "PL"),
    record(
        Company::RenAtlantico,
        "ren_atlantico",
        "21X0000000013619",
        "PT",
    ),
];

impl Company {
    fn record(&self) -> &'static CompanyRecord {
        &COMPANIES[*self as usize]
    }

    /// All operators, in declaration order
    pub fn all() -> impl Iterator<Item = Company> {
        COMPANIES.iter().map(|r| r.company)
    }

    pub fn name(&self) -> &'static str {
        self.record().name
    }

    /// EIC party code of the operator
    pub fn code(&self) -> &'static str {
        self.record().code
    }

    /// Code of the country the operator reports for
    pub fn country(&self) -> &'static str {
        self.record().country
    }

    pub fn country_entry(&self) -> Result<Country, MappingError> {
        resolve_country(self.country())
    }

    /// Query parameters: `{"country": country, "company": code}`
    pub fn get_params(&self) -> Params {
        Params::from([("country", self.country()), ("company", self.code())])
    }

    /// Terminals operated by this company
    pub fn terminals(&self) -> Vec<Terminal> {
        Terminal::all()
            .filter(|t| t.company() == self.code())
            .collect()
    }
}

entry_impls!(Company, "lso", resolve_company);

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_follows_enum_order() {
        for (i, r) in COMPANIES.iter().enumerate() {
            assert_eq!(r.company as usize, i, "{} out of place", r.name);
        }
    }

    #[test]
    fn test_round_trip_by_name_and_code() {
        for company in Company::all() {
            assert_eq!(resolve_company(company.name()).unwrap(), company);
            assert_eq!(resolve_company(company.code()).unwrap(), company);
            assert_eq!(resolve_company(company).unwrap(), company);
        }
    }

    #[test]
    fn test_codes_and_names_are_unique() {
        let mut codes: Vec<&str> = Company::all().map(|c| c.code()).collect();
        let mut names: Vec<&str> = Company::all().map(|c| c.name()).collect();
        codes.sort();
        codes.dedup();
        names.sort();
        names.dedup();
        assert_eq!(codes.len(), 30);
        assert_eq!(names.len(), 30);
    }

    #[test]
    fn test_every_company_has_a_known_country() {
        for company in Company::all() {
            let country = company.country_entry().unwrap();
            assert_eq!(country.code(), company.country());
        }
    }

    #[test]
    fn test_unknown_company() {
        let err = resolve_company("not-a-code").unwrap_err();
        assert_eq!(err.kind(), "lso");
        assert_eq!(err.to_string(), "Invalid lso string: not-a-code");
    }

    #[test]
    fn test_belgian_operator_params() {
        let fluxys = resolve_company("21X000000001006T").unwrap();
        assert_eq!(fluxys, Company::FluxysLng);
        assert_eq!(
            fluxys.get_params(),
            Params::from([("country", "BE"), ("company", "21X000000001006T")])
        );
    }

    #[test]
    fn test_params_extend_country_params() {
        for company in Company::all() {
            let params = company.get_params();
            let country_params = company.country_entry().unwrap().get_params();
            for (key, value) in country_params {
                assert_eq!(params.get(key), Some(&value));
            }
        }
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Company::LngCroatia.to_string(), "31X-LNG-HR-----7");
        assert_eq!(format!("{}", Company::SnamFsru), "59XFSRUITALIASTY");
    }

    #[test]
    fn test_terminals_of_operator() {
        let det = Company::DeutscheEnergyTerminal;
        assert_eq!(
            det.terminals(),
            vec![
                Terminal::Brunsbuettel,
                Terminal::Wilhelmshafen,
                Terminal::Wilhelmshafen2,
                Terminal::StadeTerminal,
            ]
        );
        assert!(Company::RweSupplyTrading.terminals().is_empty());
    }

    #[test]
    fn test_serde_accepts_name_or_code() {
        assert_eq!(
            serde_json::to_string(&Company::Desfa).unwrap(),
            "\"21X-GR-A-A0A0A-G\""
        );
        let by_name: Company = serde_json::from_str("\"desfa\"").unwrap();
        let by_code: Company = serde_json::from_str("\"21X-GR-A-A0A0A-G\"").unwrap();
        assert_eq!(by_name, by_code);
    }
}
