pub mod doctor;
pub mod enums;
pub mod hospital;
pub mod medical_record;
pub mod patient;

pub use doctor::*;
pub use hospital::*;
pub use medical_record::*;
pub use patient::*;
