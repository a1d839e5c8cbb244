use serde::{Deserialize, Serialize};
use std::fmt;

/// On-disk representation of the registry, chosen once per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Tabular: a header row followed by one row per patient.
    Csv,
    /// Structured document: a pretty-printed array of patient objects.
    Json,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Csv => write!(f, "CSV"),
            Encoding::Json => write!(f, "JSON"),
        }
    }
}

/// The operator-editable fields of a patient record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    DateOfBirth,
    Hometown,
    HouseNumber,
    PhoneNumber,
}

impl Field {
    /// Lowercase name used inside sentences ("Invalid date format").
    pub fn noun(&self) -> &'static str {
        match self {
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::DateOfBirth => "date",
            Field::Hometown => "hometown",
            Field::HouseNumber => "house number",
            Field::PhoneNumber => "phone number",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::DateOfBirth => "Date of Birth",
            Field::Hometown => "Hometown",
            Field::HouseNumber => "House Number",
            Field::PhoneNumber => "Phone Number",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    // Derived from date_of_birth; recomputed whenever it changes.
    // Signed so files holding a negative age for a future birth date still load.
    pub age: i32,
    pub hometown: String,
    pub house_number: String,
    pub phone_number: String,
}

impl Patient {
    /// Column order of the tabular encoding, matching the struct's serde order.
    pub const FIELDS: [&'static str; 8] = [
        "id",
        "first_name",
        "last_name",
        "date_of_birth",
        "age",
        "hometown",
        "house_number",
        "phone_number",
    ];

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Field values for a patient that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPatient {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub hometown: String,
    pub house_number: String,
    pub phone_number: String,
}

/// Replacement values for an existing patient. Blank fields keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientUpdate {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub hometown: String,
    pub house_number: String,
    pub phone_number: String,
}

impl PatientUpdate {
    /// Resolve the update against `current`, returning the candidate values.
    ///
    /// The id and age are copied from `current`; the caller re-derives age.
    pub fn apply_to(&self, current: &Patient) -> Patient {
        fn pick(new: &str, old: &str) -> String {
            let trimmed = new.trim();
            if trimmed.is_empty() {
                old.to_string()
            } else {
                trimmed.to_string()
            }
        }

        Patient {
            id: current.id,
            first_name: pick(&self.first_name, &current.first_name),
            last_name: pick(&self.last_name, &current.last_name),
            date_of_birth: pick(&self.date_of_birth, &current.date_of_birth),
            age: current.age,
            hometown: pick(&self.hometown, &current.hometown),
            house_number: pick(&self.house_number, &current.house_number),
            phone_number: pick(&self.phone_number, &current.phone_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Patient {
        Patient {
            id: 4,
            first_name: "Ama".into(),
            last_name: "Mensah".into(),
            date_of_birth: "15-06-2000".into(),
            age: 24,
            hometown: "Accra".into(),
            house_number: "H12".into(),
            phone_number: "024-000-0000".into(),
        }
    }

    #[test]
    fn blank_update_fields_keep_current_values() {
        let update = PatientUpdate {
            hometown: "  Kumasi ".into(),
            last_name: "   ".into(),
            ..Default::default()
        };
        let updated = update.apply_to(&sample());
        assert_eq!(updated.id, 4);
        assert_eq!(updated.hometown, "Kumasi");
        assert_eq!(updated.last_name, "Mensah");
        assert_eq!(updated.phone_number, "024-000-0000");
    }

    #[test]
    fn json_keys_follow_field_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let positions: Vec<usize> = Patient::FIELDS
            .iter()
            .map(|f| json.find(&format!("\"{}\"", f)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn encoding_parses_lowercase_names() {
        let enc: Encoding = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(enc, Encoding::Csv);
        assert_eq!(Encoding::Json.to_string(), "JSON");
    }
}
