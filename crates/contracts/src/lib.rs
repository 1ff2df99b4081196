//! Shared record shapes and metadata for the ERP frontend.
//!
//! Every resource the backend exposes is described here twice: as a typed
//! DTO (what travels on the wire) and as static field metadata (how it is
//! listed, searched, edited and shown).

pub mod domain;
pub mod enums;
pub mod projections;
pub mod shared;
pub mod system;
