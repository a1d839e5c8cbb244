//! Field validation and derived values.
//!
//! Everything here is pure except [`calculate_age`], which reads the local clock.
//! Use [`age_on`] when the reference date matters (tests, reports).

use crate::error::{DhpError, Result};
use crate::model::{Field, NewPatient};
use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

pub const DATE_OF_BIRTH_HINT: &str = "dd-mm-yyyy";
pub const PHONE_NUMBER_HINT: &str = "024-000-0000";

static DATE_OF_BIRTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}-[0-9]{2}-[0-9]{4}$").expect("static regex"));
static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("static regex"));

/// Check a `dd-mm-yyyy` date of birth and return the calendar date it denotes.
pub fn validate_date_of_birth(text: &str) -> Result<NaiveDate> {
    if !DATE_OF_BIRTH_RE.is_match(text) {
        return Err(DhpError::Format {
            field: Field::DateOfBirth,
            expected: DATE_OF_BIRTH_HINT,
        });
    }
    let date = NaiveDate::parse_from_str(text, "%d-%m-%Y")
        .map_err(|_| DhpError::Calendar(text.to_string()))?;
    // chrono's proleptic calendar has a year 0; the Gregorian one starts at 1
    if date.year() < 1 {
        return Err(DhpError::Calendar(text.to_string()));
    }
    Ok(date)
}

pub fn validate_phone_number(text: &str) -> Result<()> {
    if PHONE_NUMBER_RE.is_match(text) {
        Ok(())
    } else {
        Err(DhpError::Format {
            field: Field::PhoneNumber,
            expected: PHONE_NUMBER_HINT,
        })
    }
}

/// Trim a required text field, rejecting it if nothing is left.
pub fn require(field: Field, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DhpError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Completed years between `birth` and `today`. Zero for dates in the future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0)
}

/// Age in completed years as of the local date.
///
/// Expects a date of birth that already passed [`validate_date_of_birth`];
/// anything else yields 0.
pub fn calculate_age(date_of_birth: &str) -> i32 {
    calculate_age_at(date_of_birth, Local::now().date_naive())
}

pub fn calculate_age_at(date_of_birth: &str, today: NaiveDate) -> i32 {
    validate_date_of_birth(date_of_birth)
        .map(|birth| age_on(birth, today))
        .unwrap_or(0)
}

/// Run every check `add` requires, returning the trimmed values.
pub fn validate_new_patient(fields: &NewPatient) -> Result<NewPatient> {
    let first_name = require(Field::FirstName, &fields.first_name)?;
    let last_name = require(Field::LastName, &fields.last_name)?;
    let date_of_birth = fields.date_of_birth.trim().to_string();
    validate_date_of_birth(&date_of_birth)?;
    let hometown = require(Field::Hometown, &fields.hometown)?;
    let house_number = require(Field::HouseNumber, &fields.house_number)?;
    let phone_number = fields.phone_number.trim().to_string();
    validate_phone_number(&phone_number)?;

    Ok(NewPatient {
        first_name,
        last_name,
        date_of_birth,
        hometown,
        house_number,
        phone_number,
    })
}
