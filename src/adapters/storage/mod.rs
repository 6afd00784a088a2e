//! Storage adapters implementing the household ports.

mod in_memory_household_store;

pub use in_memory_household_store::InMemoryHouseholdStore;
