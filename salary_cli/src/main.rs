//! # Paycompass CLI
//!
//! Terminal front end for the salary comparison engine. Each subcommand runs
//! one calculation from `salary_core` and prints a text report, or the raw
//! JSON result with `--json`.
//!
//! ## Usage
//!
//! ```bash
//! salary_cli compare -o software-engineer -c DE -s 65000
//! salary_cli relocate -o software-engineer --from berlin --to amsterdam
//! salary_cli versus -o registered-nurse US CA
//! RUST_LOG=salary_core=info salary_cli --data-dir ./snapshot top -o physician
//! ```

mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use salary_core::calculations::{
    calculate_city_percentile, calculate_global_percentile, calculate_relocation,
    calculate_salary_result, compare_countries, lookup_city_salary, lookup_salary,
    pick_representative_countries, top_paying_countries,
};
use salary_core::{DataSource, SalaryError, SalaryRepository};

#[derive(Parser, Debug)]
#[command(name = "salary_cli")]
#[command(about = "Compare salaries across countries and cities")]
struct Cli {
    /// Dataset directory (defaults to $SALARY_DATA_DIR, then the bundled snapshot)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print the result as JSON instead of a text report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compare a salary against every tracked country
    Compare {
        #[arg(long, short = 'o')]
        occupation: String,
        /// Country code of the salary (e.g., "DE")
        #[arg(long, short = 'c')]
        country: String,
        /// Gross annual salary in the country's currency
        #[arg(long, short = 's', value_parser = parse_positive_amount)]
        salary: f64,
    },
    /// Judge a move between two cities
    Relocate {
        #[arg(long, short = 'o')]
        occupation: String,
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Show one occupation in one country, or in one city with --city
    Lookup {
        #[arg(long, short = 'o')]
        occupation: String,
        #[arg(long, short = 'c', required_unless_present = "city")]
        country: Option<String>,
        #[arg(long, conflicts_with = "country")]
        city: Option<String>,
    },
    /// Put two countries side by side
    Versus {
        #[arg(long, short = 'o')]
        occupation: String,
        first: String,
        second: String,
    },
    /// Rank a USD salary among countries (or cities with --cities)
    Percentile {
        #[arg(long, short = 'o')]
        occupation: String,
        #[arg(long, value_parser = parse_positive_amount)]
        salary_usd: f64,
        #[arg(long)]
        cities: bool,
    },
    /// List the best-paid countries for an occupation
    Top {
        #[arg(long, short = 'o')]
        occupation: String,
        #[arg(long, short = 'n', default_value_t = 5)]
        limit: usize,
    },
    /// List occupations, countries or cities
    List {
        #[arg(value_enum)]
        what: ListTarget,
    },
    /// Write the loaded dataset to a directory
    Export {
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ListTarget {
    Occupations,
    Countries,
    Cities,
}

/// Why a command did not produce a result
enum Failure {
    NotFound(String),
    Data(SalaryError),
}

impl From<SalaryError> for Failure {
    fn from(e: SalaryError) -> Self {
        Failure::Data(e)
    }
}

fn parse_positive_amount(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .replace(',', "")
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("amount must be positive, got {}", s));
    }
    Ok(value)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::NotFound(what)) => {
            eprintln!("Not found: {}", what);
            ExitCode::from(2)
        }
        Err(Failure::Data(e)) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Failure> {
    let source = match &cli.data_dir {
        Some(dir) => DataSource::Directory(dir.clone()),
        None => DataSource::from_env()?,
    };
    tracing::debug!(source = %source, "loading dataset");
    let repo = salary_core::load(&source)?;

    match &cli.command {
        Command::Compare {
            occupation,
            country,
            salary,
        } => {
            let result = calculate_salary_result(&repo, occupation, country, *salary)
                .ok_or_else(|| not_found_pair(&repo, occupation, country))?;
            let picks = pick_representative_countries(&result.comparisons, &result.country.code);
            if cli.json {
                print_json(&result);
            } else {
                report::print_salary_result(&result, &picks);
            }
        }
        Command::Relocate {
            occupation,
            from,
            to,
        } => {
            let result = calculate_relocation(&repo, occupation, from, to).ok_or_else(|| {
                Failure::NotFound(format!(
                    "relocation data for '{}' from '{}' to '{}'",
                    occupation, from, to
                ))
            })?;
            if cli.json {
                print_json(&result);
            } else {
                report::print_relocation(&result);
            }
        }
        Command::Lookup {
            occupation,
            country,
            city,
        } => match (city, country) {
            (Some(city), _) => {
                let lookup = lookup_city_salary(&repo, occupation, city).ok_or_else(|| {
                    Failure::NotFound(format!("'{}' salary in city '{}'", occupation, city))
                })?;
                if cli.json {
                    print_json(&lookup);
                } else {
                    report::print_city_lookup(&lookup);
                }
            }
            (None, Some(country)) => {
                let lookup = lookup_salary(&repo, occupation, country)
                    .ok_or_else(|| not_found_pair(&repo, occupation, country))?;
                if cli.json {
                    print_json(&lookup);
                } else {
                    report::print_lookup(&lookup);
                }
            }
            (None, None) => {
                return Err(Failure::NotFound("a --country or --city to look up".to_string()))
            }
        },
        Command::Versus {
            occupation,
            first,
            second,
        } => {
            let pair = compare_countries(&repo, occupation, first, second).ok_or_else(|| {
                Failure::NotFound(format!(
                    "'{}' salaries for both '{}' and '{}'",
                    occupation, first, second
                ))
            })?;
            if cli.json {
                print_json(&pair);
            } else {
                report::print_versus(&pair);
            }
        }
        Command::Percentile {
            occupation,
            salary_usd,
            cities,
        } => {
            let occ = repo
                .occupation(occupation)
                .ok_or_else(|| Failure::NotFound(format!("occupation '{}'", occupation)))?;
            let (percentile, scope) = if *cities {
                (calculate_city_percentile(&repo, occupation, *salary_usd), "cities")
            } else {
                (calculate_global_percentile(&repo, occupation, *salary_usd), "countries")
            };
            if cli.json {
                print_json(&serde_json::json!({
                    "occupation": occ.slug,
                    "salary_usd": salary_usd,
                    "scope": scope,
                    "percentile": percentile,
                }));
            } else {
                println!(
                    "{} at ${}: percentile {} across tracked {}",
                    occ.title,
                    report::group_thousands(*salary_usd),
                    percentile,
                    scope
                );
            }
        }
        Command::Top { occupation, limit } => {
            let occ = repo
                .occupation(occupation)
                .ok_or_else(|| Failure::NotFound(format!("occupation '{}'", occupation)))?;
            let top = top_paying_countries(&repo, occupation, *limit);
            if cli.json {
                print_json(&top);
            } else {
                report::print_top(&occ.title, &top);
            }
        }
        Command::List { what } => list(&repo, *what, cli.json),
        Command::Export { out } => {
            salary_core::write_dataset_dir(repo.dataset(), out)?;
            println!(
                "Wrote {} records to {}",
                repo.dataset().record_count(),
                out.display()
            );
        }
    }

    Ok(())
}

fn list(repo: &SalaryRepository, what: ListTarget, json: bool) {
    match what {
        ListTarget::Occupations => {
            if json {
                return print_json(&repo.occupations());
            }
            for category in repo.categories() {
                println!("{}", category);
                for occ in repo.occupations_by_category(category) {
                    println!("  {:<24} {}", occ.slug, occ.title);
                }
            }
        }
        ListTarget::Countries => {
            if json {
                return print_json(&repo.countries());
            }
            for c in repo.countries() {
                println!("  {} {:<4} {:<24} {}", c.flag, c.code, c.name, c.currency);
            }
        }
        ListTarget::Cities => {
            if json {
                return print_json(&repo.cities());
            }
            for c in repo.cities() {
                let mut tags = Vec::new();
                if c.is_capital {
                    tags.push("capital");
                }
                if c.is_tech_hub {
                    tags.push("tech hub");
                }
                println!(
                    "  {:<16} {:<20} {:<4} COL x{:.2} {}",
                    c.slug,
                    c.name,
                    c.country_code,
                    c.col_multiplier,
                    tags.join(", ")
                );
            }
        }
    }
}

/// Name whichever half of an (occupation, country) pair failed to resolve
fn not_found_pair(repo: &SalaryRepository, occupation: &str, country: &str) -> Failure {
    if repo.occupation(occupation).is_none() {
        Failure::NotFound(format!("occupation '{}'", occupation))
    } else if repo.country(country).is_none() {
        Failure::NotFound(format!("country '{}'", country))
    } else {
        Failure::NotFound(format!("'{}' salary in '{}'", occupation, country))
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing result: {}", e),
    }
}
