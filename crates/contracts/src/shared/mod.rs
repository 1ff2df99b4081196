pub mod list_envelope;
pub mod metadata;
pub mod serde_helpers;
