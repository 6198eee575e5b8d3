use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc, NaiveDate, NaiveTime, Datelike};

use crate::error::ChamberError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

/// Coarse label describing when a chamber operates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

/// A single bookable appointment interval within a day schedule.
///
/// Times are optional: the editor appends slots with empty times and the
/// user fills them in afterwards. Save-time validation requires them set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub is_available: bool,
    pub max_patients: i32,
}

impl TimeSlot {
    pub fn empty() -> Self {
        Self {
            start_time: None,
            end_time: None,
            is_available: true,
            max_patients: 1,
        }
    }
}

/// Availability window and slot list for one weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub day: Weekday,
    pub from_time: Option<NaiveTime>,
    pub to_time: Option<NaiveTime>,
    pub is_available: bool,
    pub time_slots: Vec<TimeSlot>,
}

impl DaySchedule {
    pub fn closed(day: Weekday) -> Self {
        Self {
            day,
            from_time: None,
            to_time: None,
            is_available: false,
            time_slots: Vec::new(),
        }
    }

    /// Check the working-hours window and every slot against it.
    /// Only called for available days; slots on closed days are UI remnants.
    pub fn validate_window(&self) -> Result<(), ChamberError> {
        let (from, to) = match (self.from_time, self.to_time) {
            (Some(from), Some(to)) => (from, to),
            _ => return Err(ChamberError::MissingWindow { day: self.day }),
        };

        if from >= to {
            return Err(ChamberError::InvalidTimeRange {
                day: self.day,
                from_time: from,
                to_time: to,
            });
        }

        let mut previous_end: Option<NaiveTime> = None;
        for (index, slot) in self.time_slots.iter().enumerate() {
            let (start, end) = match (slot.start_time, slot.end_time) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err(ChamberError::SlotTimesMissing { day: self.day, index }),
            };

            if start >= end {
                return Err(ChamberError::InvalidSlotRange { day: self.day, index });
            }
            if start < from || end > to {
                return Err(ChamberError::SlotOutsideWindow { day: self.day, index });
            }
            if let Some(prev_end) = previous_end {
                if start < prev_end {
                    return Err(ChamberError::OverlappingSlots { day: self.day, index });
                }
            }
            if slot.max_patients < 1 {
                return Err(ChamberError::InvalidCapacity { value: slot.max_patients });
            }

            previous_end = Some(end);
        }

        Ok(())
    }
}

/// A physical consultation location with its fees, contact numbers and
/// weekly schedule. Owned by the caller during editing and replaced
/// wholesale on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChamberConfiguration {
    pub id: Uuid,
    pub hospital_id: Uuid,
    pub floor_number: Option<String>,
    pub room_number: Option<String>,
    pub shift: Shift,
    pub address: String,
    pub city: String,
    pub new_patient_fee: f64,
    pub old_patient_fee: f64,
    pub follow_up_fee: f64,
    pub fee_note: Option<String>,
    pub contact_numbers: Vec<String>,
    pub slot_duration_minutes: i32,
    pub break_time_minutes: i32,
    pub max_patients: i32,
    pub available_days: Vec<DaySchedule>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ChamberConfiguration {
    /// Editor default: all seven weekdays present and closed.
    pub fn new(hospital_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            hospital_id,
            floor_number: None,
            room_number: None,
            shift: Shift::Morning,
            address: String::new(),
            city: String::new(),
            new_patient_fee: 0.0,
            old_patient_fee: 0.0,
            follow_up_fee: 0.0,
            fee_note: None,
            contact_numbers: Vec::new(),
            slot_duration_minutes: 30,
            break_time_minutes: 0,
            max_patients: 1,
            available_days: Weekday::ALL.iter().map(|day| DaySchedule::closed(*day)).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn day(&self, day: Weekday) -> Result<&DaySchedule, ChamberError> {
        self.available_days
            .iter()
            .find(|schedule| schedule.day == day)
            .ok_or(ChamberError::MissingWeekday { day })
    }

    pub(crate) fn day_mut(&mut self, day: Weekday) -> Result<&mut DaySchedule, ChamberError> {
        self.available_days
            .iter_mut()
            .find(|schedule| schedule.day == day)
            .ok_or(ChamberError::MissingWeekday { day })
    }

    pub(crate) fn slot_mut(
        &mut self,
        day: Weekday,
        index: usize,
    ) -> Result<&mut TimeSlot, ChamberError> {
        let schedule = self.day_mut(day)?;
        let len = schedule.time_slots.len();
        schedule
            .time_slots
            .get_mut(index)
            .ok_or(ChamberError::SlotIndexOutOfRange { day, index, len })
    }

    /// Schedule in effect on a calendar date.
    pub fn schedule_for_date(&self, date: NaiveDate) -> Result<&DaySchedule, ChamberError> {
        self.day(Weekday::from(date.weekday()))
    }

    /// Full structural validation, run before every save.
    pub fn validate(&self) -> Result<(), ChamberError> {
        if self.available_days.len() != 7 {
            return Err(ChamberError::WrongDayCount {
                count: self.available_days.len(),
            });
        }

        let mut seen = [false; 7];
        for schedule in &self.available_days {
            let index = schedule.day.index();
            if seen[index] {
                return Err(ChamberError::DuplicateWeekday { day: schedule.day });
            }
            seen[index] = true;
        }

        if self.slot_duration_minutes < 1 {
            return Err(ChamberError::InvalidSlotDuration {
                minutes: self.slot_duration_minutes,
            });
        }
        if self.break_time_minutes < 0 {
            return Err(ChamberError::InvalidBreakTime {
                minutes: self.break_time_minutes,
            });
        }
        if self.max_patients < 1 {
            return Err(ChamberError::InvalidCapacity {
                value: self.max_patients,
            });
        }

        for amount in [self.new_patient_fee, self.old_patient_fee, self.follow_up_fee] {
            if amount < 0.0 {
                return Err(ChamberError::NegativeFee { amount });
            }
        }
        if self.old_patient_fee > self.new_patient_fee {
            return Err(ChamberError::FeeOrder {
                old_patient_fee: self.old_patient_fee,
                new_patient_fee: self.new_patient_fee,
            });
        }

        for number in &self.contact_numbers {
            if number.trim().is_empty() {
                return Err(ChamberError::EmptyContactNumber);
            }
        }

        for schedule in &self.available_days {
            if !schedule.is_available {
                continue;
            }
            schedule.validate_window()?;
        }

        Ok(())
    }
}

/// Static selection lists served by the practice API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    Degrees,
    Languages,
    Specialists,
    DoctorTypes,
}

impl ReferenceKind {
    pub fn as_path_segment(&self) -> &'static str {
        match self {
            ReferenceKind::Degrees => "degrees",
            ReferenceKind::Languages => "languages",
            ReferenceKind::Specialists => "specialists",
            ReferenceKind::DoctorTypes => "doctor-types",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceItem {
    pub id: Uuid,
    pub label: String,
}
