//! Deterministic profile data.
//!
//! `sample_batch()` stands in for one response of the remote directory API:
//! twelve US profiles in a fixed order. Two of them match "john" (positions 1
//! and 5) and none sits at position 0, so filtered and unfiltered positions
//! never coincide by accident.

use anyhow::Result;
use rolodex_types::{Batch, DateOfBirth, Location, PersonName, Picture, Street, UserRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// Number of records the API is asked for.
pub const SAMPLE_SIZE: usize = 12;

struct Row {
    first: &'static str,
    last: &'static str,
    number: &'static str,
    street: &'static str,
    city: &'static str,
    state: &'static str,
    postcode: &'static str,
    cell: &'static str,
    dob: &'static str,
}

const ROWS: [Row; SAMPLE_SIZE] = [
    Row { first: "Ava", last: "Thompson", number: "4821", street: "Lakeview St", city: "Tacoma", state: "Washington", postcode: "98402", cell: "(253)-555-0142", dob: "1987-02-14T09:31:05.112Z" },
    Row { first: "Liam", last: "Johnson", number: "713", street: "Pecan Acres Ln", city: "Abilene", state: "Texas", postcode: "79601", cell: "(325)-555-0178", dob: "1979-11-02T22:04:51.870Z" },
    Row { first: "Mia", last: "Rodriguez", number: "2290", street: "Hunters Creek Dr", city: "Fresno", state: "California", postcode: "93650", cell: "(559)-555-0111", dob: "1995-07-21T13:45:00.000Z" },
    Row { first: "Noah", last: "Walker", number: "9164", street: "Railroad St", city: "Toledo", state: "Ohio", postcode: "43604", cell: "(419)-555-0190", dob: "1968-04-09T06:12:33.401Z" },
    Row { first: "Emma", last: "Davis", number: "505", street: "Mockingbird Hill", city: "Savannah", state: "Georgia", postcode: "31401", cell: "(912)-555-0164", dob: "1990-05-03T00:00:00.000Z" },
    Row { first: "John", last: "Carter", number: "3377", street: "Westheimer Rd", city: "Boise", state: "Idaho", postcode: "83702", cell: "(208)-555-0123", dob: "1983-12-30T18:20:17.559Z" },
    Row { first: "Olivia", last: "Brooks", number: "148", street: "Valwood Pkwy", city: "Billings", state: "Montana", postcode: "59101", cell: "(406)-555-0157", dob: "2001-01-09T11:11:11.111Z" },
    Row { first: "Lucas", last: "Bennett", number: "6602", street: "Spring Hill Rd", city: "Dayton", state: "Ohio", postcode: "45402", cell: "(937)-555-0136", dob: "1972-08-17T03:58:42.003Z" },
    Row { first: "Sophia", last: "Reyes", number: "2741", street: "Depaul Dr", city: "Tempe", state: "Arizona", postcode: "85281", cell: "(480)-555-0199", dob: "1998-10-25T15:36:28.640Z" },
    Row { first: "Ethan", last: "Hughes", number: "8810", street: "Parker Rd", city: "Lansing", state: "Michigan", postcode: "48933", cell: "(517)-555-0105", dob: "1964-03-03T20:49:12.275Z" },
    Row { first: "Isabella", last: "Ford", number: "1906", street: "Samaritan Dr", city: "Durham", state: "North Carolina", postcode: "27701", cell: "(919)-555-0182", dob: "1985-06-12T07:27:54.918Z" },
    Row { first: "Mason", last: "Price", number: "377", street: "Daisy Dr", city: "Provo", state: "Utah", postcode: "84601", cell: "(801)-555-0147", dob: "1993-09-28T12:03:39.764Z" },
];

fn record_from(row: &Row) -> UserRecord {
    UserRecord {
        name: PersonName {
            first: row.first.to_string(),
            last: row.last.to_string(),
        },
        email: format!(
            "{}.{}@example.com",
            row.first.to_lowercase(),
            row.last.to_lowercase()
        ),
        cell: row.cell.to_string(),
        location: Location {
            street: Street {
                number: row.number.to_string(),
                name: row.street.to_string(),
            },
            city: row.city.to_string(),
            state: row.state.to_string(),
            country: "United States".to_string(),
            postcode: row.postcode.to_string(),
        },
        dob: DateOfBirth {
            date: row.dob.to_string(),
        },
        picture: Picture {
            large: format!(
                "https://randomuser.me/api/portraits/{}.jpg",
                row.first.to_lowercase()
            ),
        },
    }
}

/// The twelve sample profiles in API order.
pub fn sample_records() -> Vec<UserRecord> {
    ROWS.iter().map(record_from).collect()
}

pub fn sample_batch() -> Batch {
    Batch::new(sample_records())
}

/// Minimal record for tests that only care about names.
pub fn user(first: &str, last: &str) -> UserRecord {
    UserRecord {
        name: PersonName {
            first: first.to_string(),
            last: last.to_string(),
        },
        email: format!("{}@example.com", first.to_lowercase()),
        cell: "555-0100".to_string(),
        location: Location {
            street: Street {
                number: "1".to_string(),
                name: "Main St".to_string(),
            },
            city: "Springfield".to_string(),
            state: "Illinois".to_string(),
            country: "United States".to_string(),
            postcode: "62701".to_string(),
        },
        dob: DateOfBirth {
            date: "1980-01-01T00:00:00.000Z".to_string(),
        },
        picture: Picture {
            large: String::new(),
        },
    }
}

/// Write `batch` as an API-shaped JSON file and return its path.
pub fn write_batch(dir: &Path, file_name: &str, batch: &Batch) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, batch.to_json_pretty()?)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_batch_round_trips_through_api_shape() -> Result<()> {
        let temp = tempfile::TempDir::new()?;
        let path = write_batch(temp.path(), "batch.json", &sample_batch())?;

        let decoded = Batch::from_slice(&fs::read(path)?)?;
        assert_eq!(decoded.results.len(), SAMPLE_SIZE);
        assert_eq!(decoded.results[5].full_name(), "John Carter");
        Ok(())
    }
}
