//! Interactive stdin prompts for the explore flow.

use std::io::{self, Write};

use anyhow::Result;

use bikeshare_explorer::config::CityData;
use bikeshare_explorer::dataset::TripDataset;
use bikeshare_explorer::filter::{DayFilter, FilterSpec, MonthFilter};
use bikeshare_explorer::output;

const PAGE_SIZE: usize = 5;

/// Asks for city, month, and day, re-prompting until each answer is
/// valid. Returns `None` when stdin is closed.
pub fn get_filters(cities: &CityData) -> Result<Option<FilterSpec>> {
    let city_list = cities.cities().collect::<Vec<_>>().join(", ");
    let city_prompt = format!("Enter a city to analyze ({city_list}): ");

    let city = loop {
        let Some(answer) = read_line(&city_prompt)? else {
            return Ok(None);
        };
        let normalized = answer.trim().to_lowercase();
        if cities.contains(&normalized) {
            break normalized;
        }
        println!("`{}` is not a city this tool knows about.", answer.trim());
    };

    let month = loop {
        let Some(answer) =
            read_line("Enter a month to filter by (january through june), or all: ")?
        else {
            return Ok(None);
        };
        match MonthFilter::parse(&answer) {
            Ok(parsed) => break parsed,
            Err(invalid) => println!("{invalid}"),
        }
    };

    let day = loop {
        let Some(answer) =
            read_line("Enter a day to filter by (monday through sunday), or all: ")?
        else {
            return Ok(None);
        };
        match DayFilter::parse(&answer) {
            Ok(parsed) => break parsed,
            Err(invalid) => println!("{invalid}"),
        }
    };

    println!("{}", "-".repeat(40));
    Ok(Some(FilterSpec { city, month, day }))
}

/// Offers the filtered records five at a time, as long as the user keeps
/// answering yes.
pub fn page_raw_data(dataset: &TripDataset) -> Result<()> {
    let mut offset = 0;
    while offset < dataset.len() {
        if !confirm("\nWould you like to see 5 rows of raw data? Enter yes or no.")? {
            return Ok(());
        }
        let end = (offset + PAGE_SIZE).min(dataset.len());
        output::print_records(&dataset.records[offset..end]);
        offset = end;
    }

    if !dataset.is_empty() {
        println!("\nThat's every matching record.");
    }
    Ok(())
}

/// Asks a yes/no question until the answer is one of the two. End of
/// input counts as no.
pub fn confirm(question: &str) -> Result<bool> {
    let prompt = format!("{question}\n");
    loop {
        let Some(answer) = read_line(&prompt)? else {
            return Ok(false);
        };
        match answer.trim().to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => println!("Please answer yes or no."),
        }
    }
}

/// Prints `prompt` and reads one line. `None` means end of input.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer)? == 0 {
        println!();
        return Ok(None);
    }
    Ok(Some(answer))
}
