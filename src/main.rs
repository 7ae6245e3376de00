mod data;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use data::loader::load_file;
use data::query;

#[derive(Parser)]
#[command(name = "cohort-roster")]
#[command(about = "Query a pipe-delimited student roster file")]
struct Cli {
    /// Path to the roster data file.
    file: PathBuf,

    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the distinct houses present in the data
    Houses,
    /// List student names, optionally restricted to one cohort
    Students {
        /// Cohort label to match exactly (e.g. "Fall 2015"); omitted = all
        /// students
        #[arg(long)]
        cohort: Option<String>,
    },
    /// Print the seven rosters: the five houses, ghosts, instructors
    Rosters,
    /// Print every parsed record
    Dump,
    /// Look up the cohort for a full name
    CohortOf { name: String },
    /// List last names appearing more than once
    DupedLastNames,
    /// List everyone sharing a person's house and cohort
    Housemates { name: String },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = load_file(&cli.file)?;
    if dataset.is_empty() {
        log::warn!("{} contains no records", cli.file.display());
    }

    match &cli.command {
        Command::Houses => {
            let houses = query::all_houses(&dataset);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&houses)?);
            } else {
                for house in houses {
                    println!("{house}");
                }
            }
        }
        Command::Students { cohort } => {
            let names = query::students_by_cohort(&dataset, cohort.as_deref());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&names)?);
            } else {
                for name in names {
                    println!("{name}");
                }
            }
        }
        Command::Rosters => {
            let groups = query::all_names_by_house(&dataset);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&groups)?);
            } else {
                for (label, names) in groups {
                    println!("{label} ({}):", names.len());
                    for name in names {
                        println!("  {name}");
                    }
                }
            }
        }
        Command::Dump => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&dataset.records)?);
            } else {
                for (name, house, head, cohort) in query::all_data(&dataset) {
                    println!("{name} | {house} | {head} | {cohort}");
                }
            }
        }
        Command::CohortOf { name } => {
            // Not-found is a sentinel, never a failure.
            let cohort = query::get_cohort_for(&dataset, name);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&cohort)?);
            } else {
                match cohort {
                    Some(cohort) => println!("{cohort}"),
                    None => println!("{name}: not found"),
                }
            }
        }
        Command::DupedLastNames => {
            let duped = query::find_duped_last_names(&dataset);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&duped)?);
            } else {
                for last_name in duped {
                    println!("{last_name}");
                }
            }
        }
        Command::Housemates { name } => {
            let housemates = query::get_housemates_for(&dataset, name);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&housemates)?);
            } else {
                for housemate in housemates {
                    println!("{housemate}");
                }
            }
        }
    }

    Ok(())
}
