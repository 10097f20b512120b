//! CSV export of the appointment collection.
//!
//! Only the full name and doctor name are quoted. Nothing is escaped, so a
//! comma or quote inside any other field, or a quote inside those two, ends
//! up in the output as-is.

use crate::record::AppointmentRecord;

pub const CSV_HEADERS: [&str; 11] = [
    "Booking Reference",
    "Full Name",
    "Email",
    "Phone",
    "Age",
    "Gender",
    "Doctor",
    "Specialization",
    "Date",
    "Time",
    "Created At",
];

pub const CSV_CONTENT_TYPE: &str = "text/csv";
pub const CSV_FILENAME: &str = "appointments.csv";

const LINE_TERMINATOR: &str = "\n";

/// Render records in the order given, header first, no trailing newline.
pub fn to_csv(records: &[AppointmentRecord]) -> String {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(CSV_HEADERS.join(","));
    rows.extend(records.iter().map(csv_row));
    rows.join(LINE_TERMINATOR)
}

fn csv_row(record: &AppointmentRecord) -> String {
    [
        record.booking_reference.clone(),
        format!("\"{}\"", record.full_name),
        record.email.clone(),
        record.phone.clone(),
        record.age.map(|a| a.to_string()).unwrap_or_default(),
        record.gender.clone(),
        format!("\"{}\"", record.doctor_name),
        record.specialization.clone(),
        record.appointment_date.clone(),
        record.appointment_time.clone(),
        record.created_at.clone(),
    ]
    .join(",")
}
