//! Appointment records and booking requests.

use serde::{Deserialize, Serialize};

use crate::error::{HabError, HabResult};
use crate::reference::BookingStamp;

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// One booked appointment, as persisted in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRecord {
    pub id: i64,
    pub booking_reference: String,
    #[serde(deserialize_with = "lenient::text")]
    pub full_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: String,
    /// `None` only for records stored with an unparseable age.
    #[serde(default, deserialize_with = "lenient::age")]
    pub age: Option<i64>,
    #[serde(deserialize_with = "lenient::text")]
    pub gender: String,
    #[serde(deserialize_with = "lenient::text")]
    pub doctor_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub specialization: String,
    #[serde(deserialize_with = "lenient::text")]
    pub appointment_date: String,
    #[serde(deserialize_with = "lenient::text")]
    pub appointment_time: String,
    pub created_at: String, // ISO-8601, never rewritten after creation
}

/// Field readers for documents written by older servers, which stored
/// request values exactly as they were sent.
mod lenient {
    use serde::de::{Deserialize, Deserializer, Error};
    use serde_json::Value;

    pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Null => Ok(String::new()),
            other => Err(D::Error::custom(format!("expected text, found {other}"))),
        }
    }

    pub fn age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => super::whole_years(&n),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }
}

fn whole_years(n: &serde_json::Number) -> Option<i64> {
    n.as_i64()
        .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
}

/// All records, in insertion order.
pub type RecordCollection = Vec<AppointmentRecord>;

/// Age as clients send it: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(serde_json::Number),
    Text(String),
}

impl AgeInput {
    /// Blank text and a numeric zero both count as missing.
    fn is_blank(&self) -> bool {
        match self {
            AgeInput::Text(s) => s.trim().is_empty(),
            AgeInput::Number(n) => n.as_f64() == Some(0.0),
        }
    }

    fn to_years(&self) -> HabResult<i64> {
        let years = match self {
            AgeInput::Number(n) => whole_years(n),
            AgeInput::Text(s) => s.trim().parse::<i64>().ok(),
        };

        years.ok_or_else(|| HabError::Validation("Age must be a whole number".to_string()))
    }
}

impl From<i64> for AgeInput {
    fn from(years: i64) -> Self {
        AgeInput::Number(years.into())
    }
}

impl From<&str> for AgeInput {
    fn from(years: &str) -> Self {
        AgeInput::Text(years.to_string())
    }
}

/// Body of a booking request. Every field is optional here so that a missing
/// field is reported as a validation failure instead of a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub age: Option<AgeInput>,
    pub gender: Option<String>,
    pub doctor_name: Option<String>,
    pub specialization: Option<String>,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
}

/// A booking request with every field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBooking {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: i64,
    pub gender: String,
    pub doctor_name: String,
    pub specialization: String,
    pub appointment_date: String,
    pub appointment_time: String,
}

fn required(field: Option<String>) -> HabResult<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(HabError::Validation(ALL_FIELDS_REQUIRED.to_string())),
    }
}

impl BookingRequest {
    pub fn validate(self) -> HabResult<ValidBooking> {
        let full_name = required(self.full_name)?;
        let email = required(self.email)?;
        let phone = required(self.phone)?;
        let age = match self.age {
            Some(age) if !age.is_blank() => age,
            _ => return Err(HabError::Validation(ALL_FIELDS_REQUIRED.to_string())),
        };
        let gender = required(self.gender)?;
        let doctor_name = required(self.doctor_name)?;
        let specialization = required(self.specialization)?;
        let appointment_date = required(self.appointment_date)?;
        let appointment_time = required(self.appointment_time)?;

        Ok(ValidBooking {
            full_name,
            email,
            phone,
            age: age.to_years()?,
            gender,
            doctor_name,
            specialization,
            appointment_date,
            appointment_time,
        })
    }
}

impl AppointmentRecord {
    pub fn new(booking: ValidBooking, stamp: BookingStamp) -> Self {
        AppointmentRecord {
            id: stamp.id,
            booking_reference: stamp.booking_reference,
            full_name: booking.full_name,
            email: booking.email,
            phone: booking.phone,
            age: Some(booking.age),
            gender: booking.gender,
            doctor_name: booking.doctor_name,
            specialization: booking.specialization,
            appointment_date: booking.appointment_date,
            appointment_time: booking.appointment_time,
            created_at: stamp.created_at,
        }
    }
}

/// What a successful booking hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBooking {
    pub id: i64,
    pub booking_reference: String,
}

/// Newest first, by `created_at`.
pub fn sort_newest_first(records: &mut RecordCollection) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> BookingRequest {
        serde_json::from_value(serde_json::json!({
            "fullName": "Jane Doe",
            "email": "j@x.com",
            "phone": "555",
            "age": "30",
            "gender": "F",
            "doctorName": "Dr. Smith",
            "specialization": "Cardiology",
            "appointmentDate": "2024-01-01",
            "appointmentTime": "10:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_validate_coerces_string_age() {
        let booking = jane().validate().unwrap();
        assert_eq!(booking.age, 30);
        assert_eq!(booking.full_name, "Jane Doe");
        assert_eq!(booking.doctor_name, "Dr. Smith");
    }

    #[test]
    fn test_validate_accepts_numeric_age() {
        let mut request = jane();
        request.age = Some(AgeInput::from(42));
        assert_eq!(request.validate().unwrap().age, 42);

        let mut request = jane();
        request.age = Some(serde_json::from_str("41.9").unwrap());
        assert_eq!(request.validate().unwrap().age, 41);
    }

    #[test]
    fn test_validate_rejects_each_missing_field() {
        let strip: [fn(&mut BookingRequest); 9] = [
            |r| r.full_name = None,
            |r| r.email = None,
            |r| r.phone = None,
            |r| r.age = None,
            |r| r.gender = None,
            |r| r.doctor_name = None,
            |r| r.specialization = None,
            |r| r.appointment_date = None,
            |r| r.appointment_time = None,
        ];

        for remove in strip {
            let mut request = jane();
            remove(&mut request);
            let err = request.validate().unwrap_err();
            assert!(matches!(err, HabError::Validation(_)));
            assert_eq!(err.to_string(), ALL_FIELDS_REQUIRED);
        }
    }

    #[test]
    fn test_validate_rejects_empty_strings() {
        let mut request = jane();
        request.email = Some(String::new());
        assert!(matches!(request.validate(), Err(HabError::Validation(_))));

        let mut request = jane();
        request.age = Some(AgeInput::from("  "));
        assert!(matches!(request.validate(), Err(HabError::Validation(_))));
    }

    #[test]
    fn test_validate_treats_numeric_zero_age_as_missing() {
        let mut request = jane();
        request.age = Some(AgeInput::from(0));
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), ALL_FIELDS_REQUIRED);

        let mut request = jane();
        request.age = Some(AgeInput::from("0"));
        assert_eq!(request.validate().unwrap().age, 0);
    }

    #[test]
    fn test_record_reads_values_stored_as_sent() {
        let record: AppointmentRecord = serde_json::from_value(serde_json::json!({
            "id": 1704103200000_i64,
            "booking_reference": "HAB-LQUR1OG0",
            "full_name": "Jane Doe",
            "email": "j@x.com",
            "phone": 5551234,
            "age": null,
            "gender": "F",
            "doctor_name": "Dr. Smith",
            "specialization": "Cardiology",
            "appointment_date": "2024-01-01",
            "appointment_time": "10:00",
            "created_at": "2024-01-01T10:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(record.phone, "5551234");
        assert_eq!(record.age, None);
    }

    #[test]
    fn test_record_reads_age_stored_as_text_or_float() {
        let mut value = serde_json::to_value(AppointmentRecord::new(
            jane().validate().unwrap(),
            BookingStamp::at(chrono::Utc::now()).unwrap(),
        ))
        .unwrap();

        value["age"] = serde_json::json!("44");
        let record: AppointmentRecord = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(record.age, Some(44));

        value["age"] = serde_json::json!(44.7);
        let record: AppointmentRecord = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(record.age, Some(44));

        value.as_object_mut().unwrap().remove("age");
        let record: AppointmentRecord = serde_json::from_value(value).unwrap();
        assert_eq!(record.age, None);
    }

    #[test]
    fn test_validate_rejects_non_numeric_age() {
        let mut request = jane();
        request.age = Some(AgeInput::from("thirty"));
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "Age must be a whole number");
    }

    #[test]
    fn test_record_serializes_with_snake_case_keys() {
        let stamp = BookingStamp {
            id: 1,
            booking_reference: "HAB-1".to_string(),
            created_at: "2024-01-01T10:00:00.000Z".to_string(),
        };
        let record = AppointmentRecord::new(jane().validate().unwrap(), stamp);
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["booking_reference"], "HAB-1");
        assert_eq!(value["full_name"], "Jane Doe");
        assert_eq!(value["doctor_name"], "Dr. Smith");
        assert_eq!(value["appointment_date"], "2024-01-01");
        assert_eq!(value["appointment_time"], "10:00");
        assert_eq!(value["created_at"], "2024-01-01T10:00:00.000Z");
        assert_eq!(value["age"], 30);
    }

    #[test]
    fn test_created_booking_uses_camel_case() {
        let created = CreatedBooking {
            id: 7,
            booking_reference: "HAB-7".to_string(),
        };
        let value = serde_json::to_value(&created).unwrap();
        assert_eq!(value, serde_json::json!({"id": 7, "bookingReference": "HAB-7"}));
    }
}
