//! Terminal rendering for appointment records.

use hab_core::AppointmentRecord;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for AppointmentRecord {
    /// One line: reference, patient, doctor, slot.
    fn render(&self) -> String {
        let slot = format!("{} {}", self.appointment_date, self.appointment_time);
        format!(
            "{}  {}  {} ({})  {}",
            self.booking_reference.bold(),
            self.full_name,
            self.doctor_name.cyan(),
            self.specialization,
            slot.dimmed()
        )
    }
}

/// Every field, one per line.
pub fn render_detail(record: &AppointmentRecord) -> Vec<String> {
    let rows = [
        ("Reference", record.booking_reference.clone()),
        ("Id", record.id.to_string()),
        ("Name", record.full_name.clone()),
        ("Email", record.email.clone()),
        ("Phone", record.phone.clone()),
        ("Age", record.age.map(|a| a.to_string()).unwrap_or_default()),
        ("Gender", record.gender.clone()),
        ("Doctor", record.doctor_name.clone()),
        ("Specialization", record.specialization.clone()),
        ("Date", record.appointment_date.clone()),
        ("Time", record.appointment_time.clone()),
        ("Booked at", record.created_at.clone()),
    ];

    rows.iter()
        .map(|(label, value)| format!("{:>15}  {}", label.dimmed(), value))
        .collect()
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
