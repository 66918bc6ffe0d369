// alsi-lookup - resolve ALSI reference codes from the command line

use alsi_mappings::{
    resolve_company, resolve_country, resolve_terminal, Company, Country, Entry, Params,
    Terminal,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "alsi-lookup", version, about = "Resolve ALSI countries, LSOs and terminals")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a country by code
    Country { id: String },
    /// Resolve an LNG system operator by symbolic name or EIC code
    Lso { id: String },
    /// Resolve a terminal by symbolic name or facility code
    Terminal { id: String },
    /// List a registry
    List {
        #[arg(value_enum)]
        registry: Registry,
        /// Only entries attributed to this country
        #[arg(long)]
        country: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Registry {
    Countries,
    Lsos,
    Terminals,
}

/// One line of output
#[derive(Serialize, Debug)]
struct Row {
    name: &'static str,
    code: &'static str,
    params: Params,
}

impl Row {
    fn from_entry<E: Entry>(entry: &E) -> Self {
        Row {
            name: entry.name(),
            code: entry.code(),
            params: entry.get_params(),
        }
    }
}

/// Result of a command: a single resolved entry, or a listing
#[derive(Serialize, Debug)]
#[serde(untagged)]
enum Output {
    One(Row),
    Many(Vec<Row>),
}

impl Output {
    fn rows(&self) -> &[Row] {
        match self {
            Output::One(row) => std::slice::from_ref(row),
            Output::Many(rows) => rows,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let output = run(&cli.command)?;
    let stdout = io::stdout();
    write_output(&mut stdout.lock(), &output, cli.json)
}

fn run(command: &Command) -> Result<Output> {
    let output = match command {
        Command::Country { id } => {
            let country = resolve_country(id)?;
            tracing::debug!(
                input = %id,
                code = %country,
                name = country.full_name(),
                "resolved country"
            );
            Output::One(Row::from_entry(&country))
        }
        Command::Lso { id } => {
            let company = resolve_company(id)?;
            tracing::debug!(input = %id, code = %company, name = company.name(), "resolved lso");
            Output::One(Row::from_entry(&company))
        }
        Command::Terminal { id } => {
            let terminal = resolve_terminal(id)?;
            tracing::debug!(
                input = %id,
                code = %terminal,
                name = terminal.name(),
                "resolved terminal"
            );
            Output::One(Row::from_entry(&terminal))
        }
        Command::List { registry, country } => {
            let filter = country
                .as_ref()
                .map(resolve_country)
                .transpose()
                .context("Invalid --country filter")?;
            Output::Many(list(*registry, filter))
        }
    };

    Ok(output)
}

fn list(registry: Registry, country: Option<Country>) -> Vec<Row> {
    let keep = |code: &str| country.map_or(true, |c| c.code() == code);

    match registry {
        Registry::Countries => Country::all()
            .filter(|c| keep(c.code()))
            .map(|c| Row::from_entry(&c))
            .collect(),
        Registry::Lsos => Company::all()
            .filter(|c| keep(c.country()))
            .map(|c| Row::from_entry(&c))
            .collect(),
        Registry::Terminals => Terminal::all()
            .filter(|t| keep(t.country()))
            .map(|t| Row::from_entry(&t))
            .collect(),
    }
}

/// Write errors (a closed pipe included) are returned, not panicked on
fn write_output<W: Write>(out: &mut W, output: &Output, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, output)?;
        writeln!(out)?;
        return Ok(());
    }

    for row in output.rows() {
        let params: Vec<String> = row
            .params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        writeln!(out, "{:<32} {:<18} {}", row.name, row.code, params.join(" "))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_terminal_command() {
        let cli =
            Cli::try_parse_from(["alsi-lookup", "terminal", "zeebrugge", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.log_level, "warn");
        match cli.command {
            Command::Terminal { id } => assert_eq!(id, "zeebrugge"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_with_filter() {
        let cli = Cli::try_parse_from(["alsi-lookup", "list", "terminals", "--country", "ES"])
            .unwrap();
        match cli.command {
            Command::List { registry, country } => {
                assert_eq!(registry, Registry::Terminals);
                assert_eq!(country.as_deref(), Some("ES"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_registry() {
        assert!(Cli::try_parse_from(["alsi-lookup", "list", "pipelines"]).is_err());
    }

    #[test]
    fn test_run_lso_by_code() {
        let output = run(&Command::Lso {
            id: "21X000000001006T".to_string(),
        })
        .unwrap();
        let rows = output.rows();
        assert!(matches!(output, Output::One(_)));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "fluxys_lng");
        assert_eq!(rows[0].params["country"], "BE");
    }

    #[test]
    fn test_run_unknown_country_fails() {
        let err = run(&Command::Country { id: "ZZ".to_string() }).unwrap_err();
        assert_eq!(err.to_string(), "Invalid country string: ZZ");
    }

    #[test]
    fn test_list_filters_by_country() {
        let rows = list(Registry::Terminals, Some(Country::FR));
        let names: Vec<&str> = rows.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["fos_tonkin", "montoir_de_bretagne", "dunkerque", "fos_cavaou", "le_havre"]
        );

        assert_eq!(list(Registry::Lsos, None).len(), 30);
        assert_eq!(list(Registry::Countries, Some(Country::GR)).len(), 1);
    }

    #[test]
    fn test_list_rejects_bad_filter() {
        let err = run(&Command::List {
            registry: Registry::Lsos,
            country: Some("Atlantis".to_string()),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid --country filter");
    }

    #[test]
    fn test_row_json_shape() {
        let row = Row::from_entry(&Terminal::Zeebrugge);
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["name"], "zeebrugge");
        assert_eq!(value["params"]["facility"], "21W0000000001245");
        assert_eq!(value["params"]["company"], "21X000000001006T");
    }

    fn render(output: &Output, json: bool) -> String {
        let mut buf = Vec::new();
        write_output(&mut buf, output, json).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_single_entry_list_is_still_a_json_array() {
        let output = run(&Command::List {
            registry: Registry::Lsos,
            country: Some("BE".to_string()),
        })
        .unwrap();
        assert_eq!(output.rows().len(), 1);

        let value: serde_json::Value = serde_json::from_str(&render(&output, true)).unwrap();
        let rows = value.as_array().expect("list output must be an array");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "fluxys_lng");
    }

    #[test]
    fn test_resolve_prints_json_object() {
        let output = run(&Command::Terminal {
            id: "zeebrugge".to_string(),
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&render(&output, true)).unwrap();
        assert!(value.is_object());
        assert_eq!(value["code"], "21W0000000001245");
    }

    #[test]
    fn test_text_output_one_line_per_row() {
        let output = Output::Many(list(Registry::Countries, None));
        let text = render(&output, false);
        assert_eq!(text.lines().count(), 13);
        assert!(text.lines().next().unwrap().ends_with("country=BE"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_pipe_is_an_error_not_a_panic() {
        let output = Output::Many(list(Registry::Terminals, None));
        assert!(write_output(&mut ClosedPipe, &output, false).is_err());
        assert!(write_output(&mut ClosedPipe, &output, true).is_err());
    }
}
