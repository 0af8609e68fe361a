/// The daily booking grid: 15-minute slots from 10:00 AM to 8:00 PM. Slot
/// labels double as the stored start-time value of an appointment.
pub const ALL_TIME_SLOTS: [&str; 41] = [
    "10:00 AM", "10:15 AM", "10:30 AM", "10:45 AM", "11:00 AM", "11:15 AM", "11:30 AM",
    "11:45 AM", "12:00 PM", "12:15 PM", "12:30 PM", "12:45 PM", "1:00 PM", "1:15 PM", "1:30 PM",
    "1:45 PM", "2:00 PM", "2:15 PM", "2:30 PM", "2:45 PM", "3:00 PM", "3:15 PM", "3:30 PM",
    "3:45 PM", "4:00 PM", "4:15 PM", "4:30 PM", "4:45 PM", "5:00 PM", "5:15 PM", "5:30 PM",
    "5:45 PM", "6:00 PM", "6:15 PM", "6:30 PM", "6:45 PM", "7:00 PM", "7:15 PM", "7:30 PM",
    "7:45 PM", "8:00 PM",
];

pub const SLOT_MINUTES: u32 = 15;

const DEFAULT_DURATION_MINUTES: u32 = 60;

/// Expands (start time, duration) pairs into the slot labels they occupy.
///
/// Each appointment blocks `ceil(duration / 15)` consecutive slots starting
/// at its start label, clipped at the end of the grid. A start time that is
/// not on the grid blocks nothing. Durations that are missing or not
/// positive count as 60 minutes. Labels are concatenated across
/// appointments without deduplication, so overlapping appointments repeat.
pub fn blocked_slots(bookings: &[(String, Option<i32>)]) -> Vec<String> {
    let mut blocked = Vec::new();

    for (start_time, duration) in bookings {
        let start_index = ALL_TIME_SLOTS
            .iter()
            .position(|slot| *slot == start_time.as_str());
        let Some(start_index) = start_index else {
            continue;
        };

        let minutes = match duration {
            Some(minutes) if *minutes > 0 => *minutes as u32,
            _ => DEFAULT_DURATION_MINUTES,
        };
        let slots_to_block = minutes.div_ceil(SLOT_MINUTES) as usize;

        for slot in ALL_TIME_SLOTS.iter().skip(start_index).take(slots_to_block) {
            blocked.push((*slot).to_string());
        }
    }

    blocked
}
