//! Campus portal backend: authentication, course enrollment, attendance,
//! assignment submission, examination records, and the departmental no-due
//! clearance workflow.
//!
//! Domain logic lives under [`portal`]; persistence is delegated to the store
//! traits each area declares so the services can be exercised against any
//! document-store backend.

pub mod config;
pub mod error;
pub mod portal;
pub mod telemetry;
