//! Command and query handlers.

pub mod household;
pub mod overlap;

pub use household::{
    CreateHouseholdCommand, CreateHouseholdHandler, DeleteHouseholdCommand,
    DeleteHouseholdHandler, GetHouseholdHandler, GetHouseholdQuery, HouseholdCommandError,
    ListHouseholdsHandler, ListHouseholdsQuery, UpdateHouseholdCommand, UpdateHouseholdHandler,
};
pub use overlap::{AnalyzeOverlapsHandler, AnalyzeOverlapsQuery};
