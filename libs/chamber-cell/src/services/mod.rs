pub mod chamber;
pub mod slots;

pub use chamber::ChamberService;
pub use slots::generate_time_slots;
