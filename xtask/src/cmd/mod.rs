pub mod doctor;
pub mod preflight;
