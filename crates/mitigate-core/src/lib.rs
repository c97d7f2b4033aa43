//! # mitigate-core
//!
//! Core types shared across all Mitigate crates.
//!
//! - Record structs for every collection (citizens, vaccinations, COVID cases,
//!   hospitals, testing centers, awareness programs)
//! - `CitizenId`, the type-insensitive citizen identifier used for joins
//! - Collection names and store ID prefixes
//! - Request DTOs that turn submitted form fields into typed records
//! - Grouped counts handed to the dashboard charts
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod forms;
pub mod ids;
pub mod reports;
