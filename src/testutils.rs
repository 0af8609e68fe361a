use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use chrono::Utc;
use uuid::Uuid;

use crate::backend::{AppointmentBackend, GalleryBackend, UnavailabilityBackend};
use crate::configuration::Configuration;
use crate::types::{
    Appointment, GalleryImage, GalleryImageChanges, NewAppointment, NewGalleryImage,
    NewUnavailability, UnavailabilityChanges, UnavailabilityEntry,
};

pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_appointments: AtomicU64,
    pub calls_to_blocked_slots: AtomicU64,
    pub calls_to_add_appointment: AtomicU64,
    pub calls_to_images: AtomicU64,
    pub calls_to_add_image: AtomicU64,
    pub calls_to_update_image: AtomicU64,
    pub calls_to_remove_image: AtomicU64,
    pub calls_to_unavailability: AtomicU64,
    pub calls_to_add_unavailability: AtomicU64,
    pub calls_to_update_unavailability: AtomicU64,
    pub calls_to_remove_unavailability: AtomicU64,
    pub appointments: Mutex<Vec<Appointment>>,
    pub blocked: Mutex<Vec<String>>,
    pub images: Mutex<Vec<GalleryImage>>,
    pub unavailability_entries: Mutex<Vec<UnavailabilityEntry>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_appointments: AtomicU64::default(),
            calls_to_blocked_slots: AtomicU64::default(),
            calls_to_add_appointment: AtomicU64::default(),
            calls_to_images: AtomicU64::default(),
            calls_to_add_image: AtomicU64::default(),
            calls_to_update_image: AtomicU64::default(),
            calls_to_remove_image: AtomicU64::default(),
            calls_to_unavailability: AtomicU64::default(),
            calls_to_add_unavailability: AtomicU64::default(),
            calls_to_update_unavailability: AtomicU64::default(),
            calls_to_remove_unavailability: AtomicU64::default(),
            appointments: Mutex::default(),
            blocked: Mutex::default(),
            images: Mutex::default(),
            unavailability_entries: Mutex::default(),
        }
    }
}

impl MockBookingBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingBackendInner::new()))
    }

    fn succeeds(&self) -> bool {
        self.0.success.load(Ordering::SeqCst)
    }
}

impl AppointmentBackend for MockBookingBackend {
    fn appointments(&self) -> Vec<Appointment> {
        self.0.calls_to_appointments.fetch_add(1, Ordering::SeqCst);
        self.0.appointments.lock().unwrap().clone()
    }

    fn blocked_slots(&self, _barber_name: &str, _date: &str) -> Vec<String> {
        self.0.calls_to_blocked_slots.fetch_add(1, Ordering::SeqCst);
        self.0.blocked.lock().unwrap().clone()
    }

    fn add_appointment(&self, appointment: NewAppointment) -> Option<Appointment> {
        self.0
            .calls_to_add_appointment
            .fetch_add(1, Ordering::SeqCst);
        if !self.succeeds() {
            return None;
        }
        Some(Appointment {
            id: Uuid::new_v4(),
            booking_number: Some(1),
            barber_name: appointment.barber_name,
            customer_name: appointment.customer_name,
            customer_phone: appointment.customer_phone,
            customer_email: appointment.customer_email,
            service: appointment.service,
            date: appointment.date,
            time: appointment.time,
            status: appointment.status,
            price: appointment.price,
            duration: appointment.duration.unwrap_or(60),
            notes: String::new(),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        })
    }
}

impl GalleryBackend for MockBookingBackend {
    fn images(&self) -> Vec<GalleryImage> {
        self.0.calls_to_images.fetch_add(1, Ordering::SeqCst);
        self.0.images.lock().unwrap().clone()
    }

    fn add_image(&self, image: NewGalleryImage) -> Option<GalleryImage> {
        self.0.calls_to_add_image.fetch_add(1, Ordering::SeqCst);
        if !self.succeeds() {
            return None;
        }
        Some(GalleryImage {
            id: Uuid::new_v4(),
            image_url: image.image_url,
            title: image.title,
            description: image.description,
            display_order: image.display_order,
            created_at: Some(Utc::now()),
        })
    }

    fn update_image(&self, _id: Uuid, _changes: GalleryImageChanges) -> bool {
        self.0.calls_to_update_image.fetch_add(1, Ordering::SeqCst);
        self.succeeds()
    }

    fn remove_image(&self, _id: Uuid) -> bool {
        self.0.calls_to_remove_image.fetch_add(1, Ordering::SeqCst);
        self.succeeds()
    }
}

impl UnavailabilityBackend for MockBookingBackend {
    fn unavailability(&self, barber_name: &str, date: &str) -> Option<UnavailabilityEntry> {
        self.0
            .calls_to_unavailability
            .fetch_add(1, Ordering::SeqCst);
        self.0
            .unavailability_entries
            .lock()
            .unwrap()
            .iter()
            .find(|entry| entry.barber_name == barber_name && entry.date == date)
            .cloned()
    }

    fn add_unavailability(&self, entry: NewUnavailability) -> Option<UnavailabilityEntry> {
        self.0
            .calls_to_add_unavailability
            .fetch_add(1, Ordering::SeqCst);
        if !self.succeeds() {
            return None;
        }
        Some(UnavailabilityEntry {
            id: Uuid::new_v4(),
            barber_name: entry.barber_name,
            date: entry.date,
            time_slots: entry.time_slots,
            is_full_day: entry.is_full_day,
            reason: entry.reason,
            created_at: Some(Utc::now()),
        })
    }

    fn update_unavailability(&self, _id: Uuid, _changes: UnavailabilityChanges) -> bool {
        self.0
            .calls_to_update_unavailability
            .fetch_add(1, Ordering::SeqCst);
        self.succeeds()
    }

    fn remove_unavailability(&self, _id: Uuid) -> bool {
        self.0
            .calls_to_remove_unavailability
            .fetch_add(1, Ordering::SeqCst);
        self.succeeds()
    }
}

#[derive(Clone)]
pub struct TestConfiguration {
    pub frontend_path: PathBuf,
}

impl TestConfiguration {
    pub fn new() -> Self {
        Self {
            frontend_path: PathBuf::from("./frontend/index.html"),
        }
    }
}

impl Configuration for TestConfiguration {
    fn password(&self) -> String {
        "123".into()
    }

    fn frontend_path(&self) -> PathBuf {
        self.frontend_path.clone()
    }

    fn port(&self) -> String {
        "0".into()
    }

    fn database_url(&self) -> Option<String> {
        None
    }
}
