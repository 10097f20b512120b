use anyhow::Result;
use clap::Args;
use hab_core::{AgeInput, AppointmentService, BookingRequest};
use owo_colors::OwoColorize;

#[derive(Args, Debug, Clone)]
pub struct BookArgs {
    #[arg(long)]
    pub full_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    /// Age in whole years
    #[arg(long)]
    pub age: String,

    #[arg(long)]
    pub gender: String,

    /// Doctor's name, e.g. "Dr. Smith"
    #[arg(long = "doctor")]
    pub doctor_name: String,

    #[arg(long)]
    pub specialization: String,

    /// Appointment date (YYYY-MM-DD)
    #[arg(long = "date")]
    pub appointment_date: String,

    /// Appointment time (HH:MM)
    #[arg(long = "time")]
    pub appointment_time: String,
}

impl BookArgs {
    pub fn into_request(self) -> BookingRequest {
        BookingRequest {
            full_name: Some(self.full_name),
            email: Some(self.email),
            phone: Some(self.phone),
            age: Some(AgeInput::Text(self.age)),
            gender: Some(self.gender),
            doctor_name: Some(self.doctor_name),
            specialization: Some(self.specialization),
            appointment_date: Some(self.appointment_date),
            appointment_time: Some(self.appointment_time),
        }
    }
}

pub fn run(service: &AppointmentService, args: BookArgs) -> Result<()> {
    let created = service.create(args.into_request())?;

    println!(
        "{} {} {}",
        "Booked".green(),
        created.booking_reference.bold(),
        format!("(id {})", created.id).dimmed()
    );

    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::commands::memory_service;
    use hab_core::RecordStore;

    pub(crate) fn args() -> BookArgs {
        BookArgs {
            full_name: "Jane Doe".to_string(),
            email: "j@x.com".to_string(),
            phone: "555".to_string(),
            age: "30".to_string(),
            gender: "F".to_string(),
            doctor_name: "Dr. Smith".to_string(),
            specialization: "Cardiology".to_string(),
            appointment_date: "2024-01-01".to_string(),
            appointment_time: "10:00".to_string(),
        }
    }

    #[test]
    fn test_book_persists_record() {
        let (store, service) = memory_service();
        run(&service, args()).unwrap();

        let records = store.load();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].age, Some(30));
        assert!(records[0].booking_reference.starts_with("HAB-"));
    }

    #[test]
    fn test_book_rejects_blank_field() {
        let (store, service) = memory_service();
        let mut blank = args();
        blank.gender = "  ".to_string();

        let err = run(&service, blank).unwrap_err();
        assert_eq!(err.to_string(), "All fields are required");
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_cli_parses_book_flags() {
        use clap::Parser;

        #[derive(Parser)]
        struct Harness {
            #[command(flatten)]
            book: BookArgs,
        }

        let parsed = Harness::try_parse_from([
            "hab",
            "--full-name",
            "Jane Doe",
            "--email",
            "j@x.com",
            "--phone",
            "555",
            "--age",
            "30",
            "--gender",
            "F",
            "--doctor",
            "Dr. Smith",
            "--specialization",
            "Cardiology",
            "--date",
            "2024-01-01",
            "--time",
            "10:00",
        ])
        .unwrap();

        assert_eq!(parsed.book.doctor_name, "Dr. Smith");
        assert_eq!(parsed.book.appointment_time, "10:00");
    }
}
