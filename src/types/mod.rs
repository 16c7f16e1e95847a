//! Wire and domain types for the agent service.

pub mod agent;
pub mod datastore;
pub mod document;
pub mod ids;
pub mod query;

pub use agent::*;
pub use datastore::*;
pub use document::*;
pub use ids::*;
pub use query::*;
