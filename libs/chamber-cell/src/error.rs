use chrono::NaiveTime;
use thiserror::Error;

use crate::models::Weekday;

#[derive(Error, Debug)]
pub enum ChamberError {
    #[error("Configuration must contain exactly 7 day schedules, found {count}")]
    WrongDayCount { count: usize },

    #[error("Duplicate schedule for {day}")]
    DuplicateWeekday { day: Weekday },

    #[error("No schedule found for {day}")]
    MissingWeekday { day: Weekday },

    #[error("No working-hours window set for {day}")]
    MissingWindow { day: Weekday },

    #[error("Time window for {day} is invalid: {from_time} is not before {to_time}")]
    InvalidTimeRange {
        day: Weekday,
        from_time: NaiveTime,
        to_time: NaiveTime,
    },

    #[error("Slot {index} on {day} has no start or end time")]
    SlotTimesMissing { day: Weekday, index: usize },

    #[error("Slot {index} on {day} has an invalid time range")]
    InvalidSlotRange { day: Weekday, index: usize },

    #[error("Slot {index} on {day} falls outside the working-hours window")]
    SlotOutsideWindow { day: Weekday, index: usize },

    #[error("Slot {index} on {day} overlaps the previous slot")]
    OverlappingSlots { day: Weekday, index: usize },

    #[error("Slot index {index} is out of range for {day} ({len} slots)")]
    SlotIndexOutOfRange {
        day: Weekday,
        index: usize,
        len: usize,
    },

    #[error("Cannot remove the last remaining slot on {day}")]
    LastSlot { day: Weekday },

    #[error("Slot duration must be at least 1 minute, got {minutes}")]
    InvalidSlotDuration { minutes: i32 },

    #[error("Break time cannot be negative, got {minutes}")]
    InvalidBreakTime { minutes: i32 },

    #[error("Patient capacity must be at least 1, got {value}")]
    InvalidCapacity { value: i32 },

    #[error("Fees cannot be negative, got {amount}")]
    NegativeFee { amount: f64 },

    #[error("Old-patient fee {old_patient_fee} cannot exceed new-patient fee {new_patient_fee}")]
    FeeOrder {
        old_patient_fee: f64,
        new_patient_fee: f64,
    },

    #[error("Contact number cannot be blank")]
    EmptyContactNumber,

    #[error("Contact index {index} is out of range ({len} entries)")]
    ContactIndexOutOfRange { index: usize, len: usize },

    #[error("Chamber not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
