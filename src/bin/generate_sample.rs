//! Generate a small sample roster file for trying out the CLI:
//!
//! ```bash
//! cargo run --bin generate_sample -- sample_roster.txt
//! cargo run -- sample_roster.txt rosters
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};

/// (first_name, last_name, house, head_of_house, cohort)
const SAMPLE: &[(&str, &str, &str, &str, &str)] = &[
    ("Harry", "Potter", "Gryffindor", "McGonagall", "Fall 2015"),
    ("Hermione", "Granger", "Gryffindor", "McGonagall", "Fall 2015"),
    ("Ron", "Weasley", "Gryffindor", "McGonagall", "Fall 2015"),
    ("Ginny", "Weasley", "Gryffindor", "McGonagall", "Spring 2016"),
    ("Seamus", "Finnigan", "Gryffindor", "McGonagall", "Fall 2015"),
    ("Colin", "Creevey", "Gryffindor", "McGonagall", "Winter 2016"),
    ("Dennis", "Creevey", "Gryffindor", "McGonagall", "Summer 2016"),
    ("Cho", "Chang", "Ravenclaw", "Flitwick", "Fall 2015"),
    ("Luna", "Lovegood", "Ravenclaw", "Flitwick", "Winter 2016"),
    ("Padma", "Patil", "Ravenclaw", "Flitwick", "Winter 2016"),
    ("Parvati", "Patil", "Gryffindor", "McGonagall", "Winter 2016"),
    ("Hannah", "Abbott", "Hufflepuff", "Sprout", "Winter 2016"),
    ("Susan", "Bones", "Hufflepuff", "Sprout", "Winter 2016"),
    ("Draco", "Malfoy", "Slytherin", "Snape", "Fall 2015"),
    ("Vincent", "Crabbe", "Slytherin", "Snape", "Summer 2016"),
    ("Zacharias", "Smith", "Dumbledore's Army", "Dumbledore", "Spring 2016"),
    ("Cormac", "McLaggen", "Dumbledore's Army", "Dumbledore", "Spring 2016"),
    ("Nearly Headless", "Nick", "", "", "G"),
    ("The Grey", "Lady", "", "", "G"),
    ("Severus", "Snape", "", "Dumbledore", "I"),
    ("Filius", "Flitwick", "", "Dumbledore", "I"),
    ("Minerva", "McGonagall", "", "Dumbledore", "I"),
];

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_roster.txt".to_string());

    let file = File::create(&path).with_context(|| format!("creating {path}"))?;
    let mut writer = BufWriter::new(file);
    for (first, last, house, head, cohort) in SAMPLE {
        writeln!(writer, "{first}|{last}|{house}|{head}|{cohort}")?;
    }
    writer.flush()?;

    println!("Wrote {} records to {path}", SAMPLE.len());
    Ok(())
}
