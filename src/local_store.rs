use crate::backend::{AppointmentBackend, GalleryBackend, UnavailabilityBackend};
use crate::schedule;
use crate::types::{
    Appointment, GalleryImage, GalleryImageChanges, NewAppointment, NewGalleryImage,
    NewUnavailability, UnavailabilityChanges, UnavailabilityEntry, STATUS_CONFIRMED,
    STATUS_PENDING,
};
use chrono::Utc;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicI32, Ordering},
        Arc, Mutex,
    },
};
use tracing::error;
use uuid::Uuid;

/// In-memory store used when no database is configured, and by tests.
/// Contents do not survive a restart.
#[derive(Debug, Clone, Default)]
pub struct LocalStore {
    appointments: Arc<Mutex<HashMap<Uuid, Appointment>>>,
    images: Arc<Mutex<HashMap<Uuid, GalleryImage>>>,
    unavailability: Arc<Mutex<HashMap<Uuid, UnavailabilityEntry>>>,
    booking_counter: Arc<AtomicI32>,
}

impl AppointmentBackend for LocalStore {
    fn appointments(&self) -> Vec<Appointment> {
        let mut appointments: Vec<Appointment> = self
            .appointments
            .lock()
            .unwrap()
            .values()
            .cloned()
            .collect();
        appointments.sort_unstable_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then(b.booking_number.cmp(&a.booking_number))
        });
        appointments
    }

    fn blocked_slots(&self, barber_name: &str, date: &str) -> Vec<String> {
        let bookings: Vec<(String, Option<i32>)> = self
            .appointments
            .lock()
            .unwrap()
            .values()
            .filter(|appointment| {
                appointment.barber_name == barber_name
                    && appointment.date == date
                    && (appointment.status == STATUS_PENDING
                        || appointment.status == STATUS_CONFIRMED)
            })
            .map(|appointment| (appointment.time.clone(), Some(appointment.duration)))
            .collect();
        schedule::blocked_slots(&bookings)
    }

    fn add_appointment(&self, appointment: NewAppointment) -> Option<Appointment> {
        let id = Uuid::new_v4();
        let booking_number = self.booking_counter.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let stored = Appointment {
            id,
            booking_number: Some(booking_number),
            barber_name: appointment.barber_name,
            customer_name: appointment.customer_name,
            customer_phone: appointment.customer_phone,
            customer_email: appointment.customer_email,
            service: appointment.service,
            date: appointment.date,
            time: appointment.time,
            status: appointment.status,
            price: appointment.price,
            duration: match appointment.duration {
                Some(minutes) if minutes > 0 => minutes,
                _ => 60,
            },
            notes: String::new(),
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.appointments
            .lock()
            .unwrap()
            .insert(id, stored.clone());
        Some(stored)
    }
}

impl GalleryBackend for LocalStore {
    fn images(&self) -> Vec<GalleryImage> {
        let mut images: Vec<GalleryImage> =
            self.images.lock().unwrap().values().cloned().collect();
        images.sort_unstable_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        images
    }

    fn add_image(&self, image: NewGalleryImage) -> Option<GalleryImage> {
        let id = Uuid::new_v4();
        let stored = GalleryImage {
            id,
            image_url: image.image_url,
            title: image.title,
            description: image.description,
            display_order: image.display_order,
            created_at: Some(Utc::now()),
        };
        self.images.lock().unwrap().insert(id, stored.clone());
        Some(stored)
    }

    fn update_image(&self, id: Uuid, changes: GalleryImageChanges) -> bool {
        if let Some(image) = self.images.lock().unwrap().get_mut(&id) {
            image.image_url = changes.image_url;
            image.title = changes.title;
            image.description = changes.description;
            image.display_order = changes.display_order;
            return true;
        }
        error!("Update failed. Gallery image {id} does not exist");
        false
    }

    fn remove_image(&self, id: Uuid) -> bool {
        if self.images.lock().unwrap().remove(&id).is_none() {
            error!("Deletion failed. Gallery image {id} does not exist");
            return false;
        }
        true
    }
}

impl UnavailabilityBackend for LocalStore {
    fn unavailability(&self, barber_name: &str, date: &str) -> Option<UnavailabilityEntry> {
        self.unavailability
            .lock()
            .unwrap()
            .values()
            .find(|entry| entry.barber_name == barber_name && entry.date == date)
            .cloned()
    }

    fn add_unavailability(&self, entry: NewUnavailability) -> Option<UnavailabilityEntry> {
        let id = Uuid::new_v4();
        let stored = UnavailabilityEntry {
            id,
            barber_name: entry.barber_name,
            date: entry.date,
            time_slots: entry.time_slots,
            is_full_day: entry.is_full_day,
            reason: entry.reason,
            created_at: Some(Utc::now()),
        };
        self.unavailability
            .lock()
            .unwrap()
            .insert(id, stored.clone());
        Some(stored)
    }

    fn update_unavailability(&self, id: Uuid, changes: UnavailabilityChanges) -> bool {
        if let Some(entry) = self.unavailability.lock().unwrap().get_mut(&id) {
            entry.time_slots = changes.time_slots;
            entry.is_full_day = changes.is_full_day;
            entry.reason = changes.reason;
            return true;
        }
        error!("Update failed. Unavailability entry {id} does not exist");
        false
    }

    fn remove_unavailability(&self, id: Uuid) -> bool {
        if self.unavailability.lock().unwrap().remove(&id).is_none() {
            error!("Deletion failed. Unavailability entry {id} does not exist");
            return false;
        }
        true
    }
}
