use colored::Colorize;
use dhp::api::{CmdMessage, CmdResult, MessageLevel};
use dhp::model::Patient;
use std::io::{self, Write};

pub(super) fn format_patient(patient: &Patient) -> String {
    format!(
        "ID: {}, Name: {}, DOB: {}, Age: {}, Hometown: {}, House Number: {}, Phone: {}",
        patient.id,
        patient.full_name(),
        patient.date_of_birth,
        patient.age,
        patient.hometown,
        patient.house_number,
        patient.phone_number
    )
}

pub(super) fn write_patients<W: Write>(out: &mut W, patients: &[Patient]) -> io::Result<()> {
    for patient in patients {
        writeln!(out, "{}", format_patient(patient))?;
    }
    Ok(())
}

pub(super) fn write_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn write_result<W: Write>(out: &mut W, result: &CmdResult) -> io::Result<()> {
    write_patients(out, &result.listed_patients)?;
    write_messages(out, &result.messages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_line_lists_every_field() {
        let patient = Patient {
            id: 2,
            first_name: "Ama".into(),
            last_name: "Mensah".into(),
            date_of_birth: "15-06-2000".into(),
            age: 24,
            hometown: "Accra".into(),
            house_number: "H12".into(),
            phone_number: "024-000-0000".into(),
        };
        assert_eq!(
            format_patient(&patient),
            "ID: 2, Name: Ama Mensah, DOB: 15-06-2000, Age: 24, Hometown: Accra, House Number: H12, Phone: 024-000-0000"
        );
    }
}
