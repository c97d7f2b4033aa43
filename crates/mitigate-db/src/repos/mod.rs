//! Record repositories.
//!
//! `records` implements create/find/update/delete/list once for every
//! [`Record`](mitigate_core::entities::Record) type. The other modules add the
//! collection-specific queries as `impl MitigateService` blocks.

pub mod aggregate;
pub mod citizen;
pub mod covid_case;
pub mod records;
pub mod testing_center;
