use chrono::{Duration, NaiveTime};

use crate::error::ChamberError;
use crate::models::{TimeSlot, Weekday};

/// Partition `[from_time, to_time)` into bookable slots.
///
/// Slots step forward by `slot_minutes + break_minutes`; a trailing
/// remainder shorter than one slot is dropped. Wall-clock addition is
/// overflow-checked so a window ending near midnight cannot wrap.
pub fn generate_time_slots(
    day: Weekday,
    from_time: NaiveTime,
    to_time: NaiveTime,
    slot_minutes: i32,
    break_minutes: i32,
    max_patients: i32,
) -> Result<Vec<TimeSlot>, ChamberError> {
    if slot_minutes < 1 {
        return Err(ChamberError::InvalidSlotDuration { minutes: slot_minutes });
    }
    if break_minutes < 0 {
        return Err(ChamberError::InvalidBreakTime { minutes: break_minutes });
    }
    if max_patients < 1 {
        return Err(ChamberError::InvalidCapacity { value: max_patients });
    }
    if from_time >= to_time {
        return Err(ChamberError::InvalidTimeRange { day, from_time, to_time });
    }

    let slot_length = Duration::minutes(slot_minutes as i64);
    let step = Duration::minutes((slot_minutes + break_minutes) as i64);

    let mut slots = Vec::new();
    let mut current = from_time;

    loop {
        let (end, wrapped) = current.overflowing_add_signed(slot_length);
        if wrapped != 0 || end > to_time {
            break;
        }

        slots.push(TimeSlot {
            start_time: Some(current),
            end_time: Some(end),
            is_available: true,
            max_patients,
        });

        let (next, wrapped) = current.overflowing_add_signed(step);
        if wrapped != 0 {
            break;
        }
        current = next;
    }

    Ok(slots)
}
