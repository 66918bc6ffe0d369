// ⚓ Terminal Registry - LNG import facilities
//
// A terminal belongs to one operator and one country. Both are stored as
// codes; the pair is always consistent with the company registry.

use crate::entities::{resolve_company, resolve_country, Company, Country};
use crate::error::MappingError;
use crate::lookup::{entry_impls, Params};

// ============================================================================
// TERMINAL
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terminal {
    Zeebrugge,
    OstseeTerminal,
    Brunsbuettel,
    Wilhelmshafen,
    Wilhelmshafen2,
    StadeTerminal,
    Mukran,
    Bilbao,
    Barcelona,
    Cartagena,
    Huelva,
    Sagunto,
    Mugardos,
    TvbVirtualBalancingLngTank,
    ElMusel,
    FosTonkin,
    MontoirDeBretagne,
    Dunkerque,
    FosCavaou,
    LeHavre,
    InkooTerminal,
    Hamina,
    IsleOfGrain,
    SouthHook,
    Revythoussa,
    Alexandroupolis,
    KrkFsru,
    Panigaglia,
    FsruOltOffshoreLngToscana,
    PortoLevante,
    Piombino,
    FsruIndependence,
    RotterdamGate,
    EemsEnergy,
    Swinoujscie,
    Sines,
}

struct TerminalRecord {
    terminal: Terminal,
    name: &'static str,
    code: &'static str,
    country: &'static str,
    company: &'static str,
}

const fn record(
    terminal: Terminal,
    name: &'static str,
    code: &'static str,
    country: &'static str,
    company: &'static str,
) -> TerminalRecord {
    TerminalRecord {
        terminal,
        name,
        code,
        country,
        company,
    }
}

/// Indexed by discriminant, so the order must follow the enum
static TERMINALS: [TerminalRecord; 36] = [
    record(
        Terminal::Zeebrugge,
        "zeebrugge",
        "21W0000000001245",
        "BE",
        "21X000000001006T",
    ),
    record(
        Terminal::OstseeTerminal,
        "ostsee_terminal",
        "37W000000000106C",
        "DE",
        "37X000000000265F",
    ),
    record(
        Terminal::Brunsbuettel,
        "brunsbuettel",
        "37W000000000107A",
        "DE",
        "21X000000001403J",
    ),
    record(
        Terminal::Wilhelmshafen,
        "wilhelmshafen",
        "21W000000000129W",
        "DE",
        "21X000000001403J",
    ),
    record(
        Terminal::Wilhelmshafen2,
        "wilhelmshafen_2",
        "37W000000000111J",
        "DE",
        "21X000000001403J",
    ),
    record(
        Terminal::StadeTerminal,
        "stade_terminal",
        "37W000000000110L",
        "DE",
        "21X000000001403J",
    ),
    record(
        Terminal::Mukran,
        "mukran",
        "37W000000000114D",
        "DE",
        "37X000000000265F",
    ),
    record(
        Terminal::Bilbao,
        "bilbao",
        "21W0000000000362",
        "ES",
        "21X000000001352A",
    ),
    record(
        Terminal::Barcelona,
        "barcelona",
        "21W000000000039X",
        "ES",
        "21X000000001254A",
    ),
    record(
        Terminal::Cartagena,
        "cartagena",
        "21W000000000038Z",
        "ES",
        "21X000000001254A",
    ),
    record(
        Terminal::Huelva,
        "huelva",
        "21W0000000000370",
        "ES",
        "21X000000001254A",
    ),
    record(
        Terminal::Sagunto,
        "sagunto",
        "21W0000000000354",
        "ES",
        "18XTGPRS-12345-G",
    ),
    record(
        Terminal::Mugardos,
        "mugardos",
        "21W0000000000338",
        "ES",
        "18XRGNSA-12345-V",
    ),
    record(
        Terminal::TvbVirtualBalancingLngTank,
        "tvb_virtual_balancing_lng_tank",
        "18W000000000GVMT",
        "ES",
        "21X0000000013368",
    ),
    record(
        Terminal::ElMusel,
        "el_musel",
        "21W0000000000346",
        "ES",
        "21X000000001254A",
    ),
    record(
        Terminal::FosTonkin,
        "fos_tonkin",
        "63W179356656691A",
        "FR",
        "21X0000000010679",
    ),
    record(
        Terminal::MontoirDeBretagne,
        "montoir_de_bretagne",
        "63W631527814486R",
        "FR",
        "21X0000000010679",
    ),
    record(
        Terminal::Dunkerque,
        "dunkerque",
        "21W0000000000451",
        "FR",
        "21X000000001331I",
    ),
    record(
        Terminal::FosCavaou,
        "fos_cavaou",
        "63W943693783886F",
        "FR",
        "21X000000001070K",
    ),
    record(
        Terminal::LeHavre,
        "le_havre",
        "63W835858561887S",
        "FR",
        "63X218318139939Y",
    ),
    record(
        Terminal::InkooTerminal,
        "inkoo_terminal",
        "21W000000000130A",
        "FI",
        "66X000000000027Z",
    ),
    record(
        Terminal::Hamina,
        "hamina",
        "66W000000000001U",
        "FI",
        "66X-00000000024H",
    ),
    record(
        Terminal::IsleOfGrain,
        "isle_of_grain",
        "21W000000000099F",
        "GB",
        "21X-GB-A-A0A0A-7",
    ),
    record(
        Terminal::SouthHook,
        "south_hook",
        "21W0000000000419",
        "GB",
        "21X0000000013554",
    ),
    record(
        Terminal::Revythoussa,
        "revythoussa",
        "21W000000000040B",
        "GR",
        "21X-GR-A-A0A0A-G",
    ),
    record(
        Terminal::Alexandroupolis,
        "alexandroupolis",
        "21W0000000001318",
        "GR",
        "21X738265265081N",
    ),
    record(
        Terminal::KrkFsru,
        "krk_fsru",
        "31W-0000-G-000-Z",
        "HR",
        "31X-LNG-HR-----7",
    ),
    record(
        Terminal::Panigaglia,
        "panigaglia",
        "59W0000000000011",
        "IT",
        "26X00000117915-0",
    ),
    record(
        Terminal::FsruOltOffshoreLngToscana,
        "fsru_olt_offshore_lng_toscana",
        "21W0000000000443",
        "IT",
        "21X000000001109G",
    ),
    record(
        Terminal::PortoLevante,
        "porto_levante",
        "21W000000000082W",
        "IT",
        "21X000000001360B",
    ),
    record(
        Terminal::Piombino,
        "piombino",
        "59WFSRUGOLARTUNH",
        "IT",
        "59XFSRUITALIASTY",
    ),
    record(
        Terminal::FsruIndependence,
        "fsru_independence",
        "21W0000000001253",
        "LT",
        "21X0000000013740",
    ),
    record(
        Terminal::RotterdamGate,
        "rotterdam_gate",
        "21W0000000000079",
        "NL",
        "21X000000001063H",
    ),
    record(
        Terminal::EemsEnergy,
        "eems_energy",
        "52W000000000001W",
        "NL",
        "52X000000000088H",
    ),
    record(
        Terminal::Swinoujscie,
        "swinoujscie",
        "21W000000000096L",
        "PL",
        "21X-PL-A-A0A0A-B",
    ),
    record(
        Terminal::Sines,
        "sines",
        "16WTGNL01------O",
        "PT",
        "21X0000000013619",
    ),
];

impl Terminal {
    fn record(&self) -> &'static TerminalRecord {
        &TERMINALS[*self as usize]
    }

    /// All terminals, in declaration order
    pub fn all() -> impl Iterator<Item = Terminal> {
        TERMINALS.iter().map(|r| r.terminal)
    }

    pub fn name(&self) -> &'static str {
        self.record().name
    }

    /// Facility code
    pub fn code(&self) -> &'static str {
        self.record().code
    }

    pub fn country(&self) -> &'static str {
        self.record().country
    }

    /// Code of the operating company
    pub fn company(&self) -> &'static str {
        self.record().company
    }

    pub fn country_entry(&self) -> Result<Country, MappingError> {
        resolve_country(self.country())
    }

    pub fn company_entry(&self) -> Result<Company, MappingError> {
        resolve_company(self.company())
    }

    /// Query parameters: `{"country", "company", "facility"}`
    pub fn get_params(&self) -> Params {
        Params::from([
            ("country", self.country()),
            ("company", self.company()),
            ("facility", self.code()),
        ])
    }
}

entry_impls!(Terminal, "terminal", resolve_terminal);

// ============================================================================
// TESTS
// ============================================================================
