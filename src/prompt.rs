//! Interactive selection of a city and filters from stdin.
//!
//! Every question re-asks until the answer parses into the canonical
//! enumerations, so the pipeline only ever sees validated values.

use std::io::{self, Write};
use std::str::FromStr;

use bikeshare_explorer::city::City;
use bikeshare_explorer::filter::TripFilter;

/// A validated city choice plus month/day selectors.
#[derive(Debug, Clone, Copy)]
pub struct Selection {
    pub city: City,
    pub filter: TripFilter,
}

/// Asks for city, month, and day.
pub fn get_filters() -> io::Result<Selection> {
    let city = ask_choice(
        "Choose a city (Chicago, New York City, Washington): ",
        "Invalid city. Please enter Chicago, New York City, or Washington: ",
    )?;
    let month = ask_optional(
        "Filter by month? (January..June or 'all'): ",
        "Invalid month. Enter January..June or 'all': ",
    )?;
    let day = ask_optional(
        "Filter by day of week? (e.g., Monday or 'all'): ",
        "Invalid day. Enter Monday..Sunday or 'all': ",
    )?;

    println!("{}", "-".repeat(40));

    Ok(Selection {
        city,
        filter: TripFilter { month, day },
    })
}

/// Yes/no prompt; anything other than "yes" counts as no.
pub fn confirm(question: &str) -> io::Result<bool> {
    Ok(ask(question)? == "yes")
}

fn ask(question: &str) -> io::Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_lowercase())
}

fn ask_choice<T: FromStr>(question: &str, retry: &str) -> io::Result<T> {
    let mut answer = ask(question)?;
    loop {
        match answer.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => answer = ask(retry)?,
        }
    }
}

/// Like `ask_choice`, but "all" selects no filter.
fn ask_optional<T: FromStr>(question: &str, retry: &str) -> io::Result<Option<T>> {
    let mut answer = ask(question)?;
    loop {
        if answer == "all" {
            return Ok(None);
        }
        match answer.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => answer = ask(retry)?,
        }
    }
}
