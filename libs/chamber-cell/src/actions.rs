use chrono::NaiveTime;

use crate::error::ChamberError;
use crate::models::{ChamberConfiguration, TimeSlot, Weekday};
use crate::services::slots::generate_time_slots;

/// Schedule mutations, one variant per editor gesture. Each reducer
/// validates its inputs before touching the configuration; a rejected
/// action leaves the configuration exactly as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleAction {
    ToggleDay {
        day: Weekday,
    },
    SetTimes {
        day: Weekday,
        from_time: NaiveTime,
        to_time: NaiveTime,
    },
    AddSlot {
        day: Weekday,
    },
    RemoveSlot {
        day: Weekday,
        index: usize,
    },
    SetSlotTimes {
        day: Weekday,
        index: usize,
        start_time: NaiveTime,
        end_time: NaiveTime,
    },
    ToggleSlot {
        day: Weekday,
        index: usize,
    },
    SetSlotCapacity {
        day: Weekday,
        index: usize,
        max_patients: i32,
    },
    /// Replace the day's slot list with the partition of its window
    /// computed from the chamber's slot-duration/break-time policy.
    GenerateSlots {
        day: Weekday,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeeAction {
    SetNewPatientFee(f64),
    SetOldPatientFee(f64),
    SetFollowUpFee(f64),
    SetFeeNote(Option<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactAction {
    Add(String),
    Set { index: usize, number: String },
    Remove { index: usize },
}

impl ChamberConfiguration {
    pub fn apply_schedule(&mut self, action: ScheduleAction) -> Result<(), ChamberError> {
        match action {
            ScheduleAction::ToggleDay { day } => {
                // Flips the flag only; window times and slots are kept so
                // re-opening a day restores what the user already typed.
                let schedule = self.day_mut(day)?;
                schedule.is_available = !schedule.is_available;
                Ok(())
            }
            ScheduleAction::SetTimes { day, from_time, to_time } => {
                if from_time >= to_time {
                    return Err(ChamberError::InvalidTimeRange { day, from_time, to_time });
                }
                let schedule = self.day_mut(day)?;
                schedule.from_time = Some(from_time);
                schedule.to_time = Some(to_time);
                Ok(())
            }
            ScheduleAction::AddSlot { day } => {
                self.day_mut(day)?.time_slots.push(TimeSlot::empty());
                Ok(())
            }
            ScheduleAction::RemoveSlot { day, index } => {
                let schedule = self.day_mut(day)?;
                let len = schedule.time_slots.len();
                if index >= len {
                    return Err(ChamberError::SlotIndexOutOfRange { day, index, len });
                }
                if len <= 1 {
                    return Err(ChamberError::LastSlot { day });
                }
                schedule.time_slots.remove(index);
                Ok(())
            }
            ScheduleAction::SetSlotTimes { day, index, start_time, end_time } => {
                if start_time >= end_time {
                    return Err(ChamberError::InvalidSlotRange { day, index });
                }
                let slot = self.slot_mut(day, index)?;
                slot.start_time = Some(start_time);
                slot.end_time = Some(end_time);
                Ok(())
            }
            ScheduleAction::ToggleSlot { day, index } => {
                let slot = self.slot_mut(day, index)?;
                slot.is_available = !slot.is_available;
                Ok(())
            }
            ScheduleAction::SetSlotCapacity { day, index, max_patients } => {
                if max_patients < 1 {
                    return Err(ChamberError::InvalidCapacity { value: max_patients });
                }
                self.slot_mut(day, index)?.max_patients = max_patients;
                Ok(())
            }
            ScheduleAction::GenerateSlots { day } => {
                let slot_minutes = self.slot_duration_minutes;
                let break_minutes = self.break_time_minutes;
                let capacity = self.max_patients;
                let schedule = self.day_mut(day)?;
                let (from, to) = match (schedule.from_time, schedule.to_time) {
                    (Some(from), Some(to)) => (from, to),
                    _ => return Err(ChamberError::MissingWindow { day }),
                };
                schedule.time_slots =
                    generate_time_slots(day, from, to, slot_minutes, break_minutes, capacity)?;
                Ok(())
            }
        }
    }

    pub fn apply_fee(&mut self, action: FeeAction) -> Result<(), ChamberError> {
        match action {
            FeeAction::SetNewPatientFee(amount) => {
                if amount < 0.0 {
                    return Err(ChamberError::NegativeFee { amount });
                }
                if self.old_patient_fee > amount {
                    return Err(ChamberError::FeeOrder {
                        old_patient_fee: self.old_patient_fee,
                        new_patient_fee: amount,
                    });
                }
                self.new_patient_fee = amount;
                Ok(())
            }
            FeeAction::SetOldPatientFee(amount) => {
                if amount < 0.0 {
                    return Err(ChamberError::NegativeFee { amount });
                }
                if amount > self.new_patient_fee {
                    return Err(ChamberError::FeeOrder {
                        old_patient_fee: amount,
                        new_patient_fee: self.new_patient_fee,
                    });
                }
                self.old_patient_fee = amount;
                Ok(())
            }
            FeeAction::SetFollowUpFee(amount) => {
                if amount < 0.0 {
                    return Err(ChamberError::NegativeFee { amount });
                }
                self.follow_up_fee = amount;
                Ok(())
            }
            FeeAction::SetFeeNote(note) => {
                self.fee_note = note;
                Ok(())
            }
        }
    }

    pub fn apply_contact(&mut self, action: ContactAction) -> Result<(), ChamberError> {
        match action {
            ContactAction::Add(number) => {
                if number.trim().is_empty() {
                    return Err(ChamberError::EmptyContactNumber);
                }
                self.contact_numbers.push(number);
                Ok(())
            }
            ContactAction::Set { index, number } => {
                if number.trim().is_empty() {
                    return Err(ChamberError::EmptyContactNumber);
                }
                let len = self.contact_numbers.len();
                match self.contact_numbers.get_mut(index) {
                    Some(entry) => {
                        *entry = number;
                        Ok(())
                    }
                    None => Err(ChamberError::ContactIndexOutOfRange { index, len }),
                }
            }
            ContactAction::Remove { index } => {
                let len = self.contact_numbers.len();
                if index >= len {
                    return Err(ChamberError::ContactIndexOutOfRange { index, len });
                }
                self.contact_numbers.remove(index);
                Ok(())
            }
        }
    }
}
