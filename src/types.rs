use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";

/// A booked appointment as exposed to callers. Field names follow the
/// camelCase API vocabulary; the store columns are snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub booking_number: Option<i32>,
    pub barber_name: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub price: String,
    pub duration: i32,
    pub notes: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for a new booking. The store assigns id, booking number and
/// timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub barber_name: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub service: String,
    pub date: String,
    pub time: String,
    pub status: String,
    pub price: String,
    pub duration: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: Uuid,
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewGalleryImage {
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
}

/// Full-field update for a gallery image. Every mutable column is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImageChanges {
    pub image_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnavailabilityEntry {
    pub id: Uuid,
    pub barber_name: String,
    pub date: String,
    pub time_slots: Vec<String>,
    pub is_full_day: bool,
    pub reason: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUnavailability {
    pub barber_name: String,
    pub date: String,
    pub time_slots: Vec<String>,
    pub is_full_day: bool,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnavailabilityChanges {
    pub time_slots: Vec<String>,
    pub is_full_day: bool,
    pub reason: Option<String>,
}

/// Per-day unavailability summary: the blocked slot labels and whether the
/// whole day is off.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnavailableSlots {
    pub slots: Vec<String>,
    pub is_full_day: bool,
}
