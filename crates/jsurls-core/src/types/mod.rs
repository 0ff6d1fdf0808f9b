//! Plain data types shared between the engine and its callers.

mod candidate;
mod policy;

pub use candidate::CandidateEntry;
pub use policy::ContextPolicy;
