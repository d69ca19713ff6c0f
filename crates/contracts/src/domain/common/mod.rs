//! Common types and traits for all master-data records

pub mod id_sequence;
pub mod master_record;
pub mod record_id;

// Re-exports
pub use id_sequence::{IdExhausted, IdSequence};
pub use master_record::MasterRecord;
pub use record_id::RecordId;
