//! Build-time entry point.
//!
//! ```text
//! zenith-site [--root DIR] routes
//! zenith-site [--root DIR] paths
//! zenith-site [--root DIR] translate <locale> <key> [name=value ...]
//! zenith-site [--root DIR] check
//! zenith-site [--root DIR] set-locale <locale>
//! ```

use std::collections::BTreeMap;
use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;
use tracing_subscriber::EnvFilter;
use zenith_site::catalogue::{
    LocationParams,
    ServiceLocationParams,
    ServiceParams,
};
use zenith_site::{
    Params,
    Site,
};

/// Subcommand selected on the command line.
#[derive(Debug)]
enum Command {
    /// Print the localized route manifest.
    Routes,
    /// Print the parameters of every statically generated page.
    Paths,
    /// Resolve one key.
    Translate {
        /// Requested locale code.
        locale: String,
        /// Dotted key.
        key: String,
        /// `name=value` substitutions.
        params: Params,
    },
    /// Report keys missing from each locale.
    Check,
    /// Persist a new locale preference.
    SetLocale {
        /// New locale code.
        locale: String,
    },
}

/// Output of the `paths` command.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StaticPaths {
    /// `/services/{service}` pages.
    services: Vec<ServiceParams>,
    /// `/locations/{location}` pages.
    locations: Vec<LocationParams>,
    /// `/services/{service}/{location}` pages.
    service_locations: Vec<ServiceLocationParams>,
}

/// Splits the arguments into the site root and the command.
fn parse_args(args: &[String]) -> Result<(PathBuf, Command), String> {
    let mut root = PathBuf::from(".");
    let mut rest = args;

    if let [flag, dir, tail @ ..] = rest
        && flag == "--root"
    {
        root = PathBuf::from(dir);
        rest = tail;
    }

    let command = match rest {
        [cmd] if cmd == "routes" => Command::Routes,
        [cmd] if cmd == "paths" => Command::Paths,
        [cmd] if cmd == "check" => Command::Check,
        [cmd, locale] if cmd == "set-locale" => Command::SetLocale { locale: locale.clone() },
        [cmd, locale, key, pairs @ ..] if cmd == "translate" => {
            let params = pairs
                .iter()
                .map(|pair| {
                    pair.split_once('=').ok_or_else(|| format!("Invalid parameter '{pair}'"))
                })
                .collect::<Result<Params, String>>()?;
            Command::Translate { locale: locale.clone(), key: key.clone(), params }
        }
        _ => return Err("Usage: zenith-site [--root DIR] <routes|paths|check|translate <locale> <key> [name=value ...]|set-locale <locale>>".to_string()),
    };

    Ok((root, command))
}

/// Pretty-prints `value` to stdout.
fn write_json<T: Serialize>(value: &T) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)
}

/// Executes `command` against a loaded site.
fn run(site: &Site, command: Command) -> std::io::Result<()> {
    match command {
        Command::Routes => write_json(&site.route_manifest()),
        Command::Paths => {
            let catalogue = site.catalogue();
            write_json(&StaticPaths {
                services: catalogue.service_ids(),
                locations: catalogue.location_ids(),
                service_locations: catalogue.service_location_paths(),
            })
        }
        Command::Translate { locale, key, params } => {
            let text = site.translator().resolve(&locale, &key, &params);
            writeln!(std::io::stdout().lock(), "{text}")
        }
        Command::Check => {
            let translator = site.translator();
            let report: BTreeMap<&str, Vec<String>> = site
                .registry()
                .codes()
                .map(|locale| (locale, translator.missing_keys(locale)))
                .filter(|(_, missing)| !missing.is_empty())
                .collect();
            for (locale, missing) in &report {
                tracing::warn!("{} is missing {} translation(s)", locale, missing.len());
            }
            write_json(&report)
        }
        Command::SetLocale { locale } => {
            let store = site.preference_store();
            let mut context = site.locale_context(None);
            if context.set_locale(site.registry(), &locale, &store) {
                tracing::info!("Locale preference set to {}", context.active());
            }
            writeln!(std::io::stdout().lock(), "{}", context.active())
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (root, command) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            tracing::error!("{}", message);
            return ExitCode::from(2);
        }
    };

    let site = match Site::load(&root) {
        Ok(site) => site,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&site, command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Failed to write output: {}", e);
            ExitCode::FAILURE
        }
    }
}
