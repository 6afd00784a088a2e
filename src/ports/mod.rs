//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HouseholdRepository` - write access to household records
//! - `HouseholdReader` - read access to household records

mod household_reader;
mod household_repository;

pub use household_reader::HouseholdReader;
pub use household_repository::{HouseholdRepository, HouseholdStoreError};
