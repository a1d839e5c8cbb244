use super::print::{write_messages, write_result};
use dhp::api::{CmdMessage, DhpApi};
use dhp::error::{DhpError, Result};
use dhp::model::{Encoding, Field, NewPatient, PatientUpdate};
use dhp::store::DataStore;
use dhp::validation::{
    require, validate_date_of_birth, validate_phone_number, DATE_OF_BIRTH_HINT,
    PHONE_NUMBER_HINT,
};
use std::io::{BufRead, Write};

const MENU: &str = "\nMenu:
1. Add New Patient
2. Get All Patients
3. Search Patient by ID
4. Update Patient by ID
5. Delete Patient by ID
6. Exit";

enum Flow {
    Continue,
    Exit,
}

/// Outcome of asking for one add-patient field.
enum Answer {
    Value(String),
    Rejected,
    Closed,
}

/// Bail out of the current step when input has ended.
macro_rules! or_exit {
    ($prompt:expr) => {
        match $prompt? {
            Some(line) => line,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Unwrap an [`Answer`], abandoning the step if it was rejected or input ended.
macro_rules! answer {
    ($prompt:expr) => {
        match $prompt? {
            Answer::Value(value) => value,
            Answer::Rejected => return Ok(Flow::Continue),
            Answer::Closed => return Ok(Flow::Exit),
        }
    };
}

/// The interactive conversation with the operator.
///
/// Reads answers from `input` and writes prompts and results to `output`; end of input
/// is treated like choosing Exit.
pub(super) struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(super) fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub(super) fn welcome(&mut self) -> Result<()> {
        self.say("Welcome to the DHP Patient Management System!")
    }

    pub(super) fn goodbye(&mut self) -> Result<()> {
        self.say("Goodbye")
    }

    /// Ask until the operator picks CSV or JSON. `None` if input ends first.
    pub(super) fn choose_encoding(&mut self) -> Result<Option<Encoding>> {
        self.say("Choose storage type:\n1. CSV\n2. JSON")?;
        loop {
            let Some(choice) = self.prompt("Enter your choice (1 or 2): ")? else {
                return Ok(None);
            };
            match choice.as_str() {
                "1" => return Ok(Some(Encoding::Csv)),
                "2" => return Ok(Some(Encoding::Json)),
                _ => self.reject("Invalid choice. Please enter 1 for CSV or 2 for JSON.")?,
            }
        }
    }

    pub(super) fn run<S: DataStore>(&mut self, api: &mut DhpApi<S>) -> Result<()> {
        loop {
            self.say(MENU)?;
            let flow = match self.prompt("Enter your choice: ")?.as_deref() {
                Some("1") => self.add_patient(api)?,
                Some("2") => self.list_patients(api)?,
                Some("3") => self.search_patient(api)?,
                Some("4") => self.update_patient(api)?,
                Some("5") => self.delete_patient(api)?,
                Some("6") | None => Flow::Exit,
                Some(_) => {
                    self.reject("Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };
            if let Flow::Exit = flow {
                return self.goodbye();
            }
        }
    }

    fn add_patient<S: DataStore>(&mut self, api: &mut DhpApi<S>) -> Result<Flow> {
        self.say("\nAdd New Patient")?;

        let first_name = answer!(self.prompt_required(Field::FirstName));
        let last_name = answer!(self.prompt_required(Field::LastName));
        let date_of_birth = answer!(self.prompt_until_valid(
            &format!("Date of Birth ({}): ", DATE_OF_BIRTH_HINT),
            |text| validate_date_of_birth(text).map(|_| ()),
        ));
        let hometown = answer!(self.prompt_required(Field::Hometown));
        let house_number = answer!(self.prompt_required(Field::HouseNumber));
        let phone_number = answer!(self.prompt_until_valid(
            &format!("Phone Number ({}): ", PHONE_NUMBER_HINT),
            validate_phone_number,
        ));

        let fields = NewPatient {
            first_name,
            last_name,
            date_of_birth,
            hometown,
            house_number,
            phone_number,
        };
        let result = api.add_patient(&fields)?;
        write_result(&mut self.output, &result)?;
        Ok(Flow::Continue)
    }

    fn list_patients<S: DataStore>(&mut self, api: &mut DhpApi<S>) -> Result<Flow> {
        let result = api.list_patients()?;
        if !result.listed_patients.is_empty() {
            self.say("\nAll Patients:")?;
        }
        write_result(&mut self.output, &result)?;
        Ok(Flow::Continue)
    }

    fn search_patient<S: DataStore>(&mut self, api: &mut DhpApi<S>) -> Result<Flow> {
        if self.report_if_empty(api)? {
            return Ok(Flow::Continue);
        }
        let id = or_exit!(self.prompt("Enter patient ID: "));
        let result = api.get_patient(&id)?;
        if !result.listed_patients.is_empty() {
            self.say("\nPatient Found:")?;
        }
        write_result(&mut self.output, &result)?;
        Ok(Flow::Continue)
    }

    fn update_patient<S: DataStore>(&mut self, api: &mut DhpApi<S>) -> Result<Flow> {
        if self.report_if_empty(api)? {
            return Ok(Flow::Continue);
        }
        let id = or_exit!(self.prompt("Enter patient ID: "));
        let found = api.get_patient(&id)?;
        let Some(current) = found.listed_patients.first().cloned() else {
            write_result(&mut self.output, &found)?;
            return Ok(Flow::Continue);
        };

        self.say("\nUpdate Patient:")?;
        self.say("Leave the field blank to keep the current value.")?;
        let changes = PatientUpdate {
            first_name: or_exit!(self.prompt_keeping(Field::FirstName, &current.first_name)),
            last_name: or_exit!(self.prompt_keeping(Field::LastName, &current.last_name)),
            date_of_birth: or_exit!(
                self.prompt_keeping(Field::DateOfBirth, &current.date_of_birth)
            ),
            hometown: or_exit!(self.prompt_keeping(Field::Hometown, &current.hometown)),
            house_number: or_exit!(
                self.prompt_keeping(Field::HouseNumber, &current.house_number)
            ),
            phone_number: or_exit!(
                self.prompt_keeping(Field::PhoneNumber, &current.phone_number)
            ),
        };

        let result = api.update_patient(current.id, &changes)?;
        write_result(&mut self.output, &result)?;
        Ok(Flow::Continue)
    }

    fn delete_patient<S: DataStore>(&mut self, api: &mut DhpApi<S>) -> Result<Flow> {
        if self.report_if_empty(api)? {
            return Ok(Flow::Continue);
        }
        let id = or_exit!(self.prompt("Enter patient ID: "));
        let result = api.delete_patient(&id)?;
        write_result(&mut self.output, &result)?;
        Ok(Flow::Continue)
    }

    fn report_if_empty<S: DataStore>(&mut self, api: &mut DhpApi<S>) -> Result<bool> {
        if api.is_empty()? {
            write_messages(&mut self.output, &[CmdMessage::info("No patients found.")])?;
            return Ok(true);
        }
        Ok(false)
    }

    /// Ask once for a required field; a blank answer is reported and rejected.
    fn prompt_required(&mut self, field: Field) -> Result<Answer> {
        let Some(answer) = self.prompt(&format!("{}: ", field))? else {
            return Ok(Answer::Closed);
        };
        match require(field, &answer) {
            Ok(value) => Ok(Answer::Value(value)),
            Err(e) => {
                self.reject_error(&e)?;
                Ok(Answer::Rejected)
            }
        }
    }

    /// Ask until `check` accepts the answer.
    fn prompt_until_valid(
        &mut self,
        label: &str,
        check: impl Fn(&str) -> Result<()>,
    ) -> Result<Answer> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(Answer::Closed);
            };
            match check(&answer) {
                Ok(()) => return Ok(Answer::Value(answer)),
                Err(e) => self.reject_error(&e)?,
            }
        }
    }

    fn prompt_keeping(&mut self, field: Field, current: &str) -> Result<Option<String>> {
        self.prompt(&format!("{} ({}): ", field, current))
    }

    /// Write `label` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    fn reject(&mut self, text: &str) -> Result<()> {
        write_messages(&mut self.output, &[CmdMessage::error(text)])?;
        Ok(())
    }

    fn reject_error(&mut self, error: &DhpError) -> Result<()> {
        self.reject(&error.to_string())
    }
}
