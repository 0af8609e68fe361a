use crate::types::{
    Appointment, GalleryImage, GalleryImageChanges, NewAppointment, NewGalleryImage,
    NewUnavailability, UnavailabilityChanges, UnavailabilityEntry, UnavailableSlots,
};
use uuid::Uuid;

/// Access to the appointments table. Fetch failures are logged by the
/// implementation and surface as empty results, never as errors.
pub trait AppointmentBackend: Clone + Send + Sync + 'static {
    /// All appointments, newest first.
    fn appointments(&self) -> Vec<Appointment>;
    /// Slot labels blocked by pending/confirmed appointments of one barber
    /// on one date. Overlapping appointments contribute duplicate labels.
    fn blocked_slots(&self, barber_name: &str, date: &str) -> Vec<String>;
    fn add_appointment(&self, appointment: NewAppointment) -> Option<Appointment>;
}

/// Access to the gallery table.
pub trait GalleryBackend: Clone + Send + Sync + 'static {
    /// All images, by display order, then newest first.
    fn images(&self) -> Vec<GalleryImage>;
    fn add_image(&self, image: NewGalleryImage) -> Option<GalleryImage>;
    fn update_image(&self, id: Uuid, changes: GalleryImageChanges) -> bool;
    fn remove_image(&self, id: Uuid) -> bool;
}

/// Access to the unavailability table. At most one entry per (barber, date)
/// pair is expected by callers.
pub trait UnavailabilityBackend: Clone + Send + Sync + 'static {
    fn unavailability(&self, barber_name: &str, date: &str) -> Option<UnavailabilityEntry>;

    fn unavailable_slots(&self, barber_name: &str, date: &str) -> UnavailableSlots {
        match self.unavailability(barber_name, date) {
            Some(entry) => UnavailableSlots {
                slots: entry.time_slots,
                is_full_day: entry.is_full_day,
            },
            None => UnavailableSlots::default(),
        }
    }

    fn add_unavailability(&self, entry: NewUnavailability) -> Option<UnavailabilityEntry>;
    fn update_unavailability(&self, id: Uuid, changes: UnavailabilityChanges) -> bool;
    fn remove_unavailability(&self, id: Uuid) -> bool;
}

/// Umbrella bound for state shared across the whole router.
pub trait BookingBackend: AppointmentBackend + GalleryBackend + UnavailabilityBackend {}

impl<T: AppointmentBackend + GalleryBackend + UnavailabilityBackend> BookingBackend for T {}
