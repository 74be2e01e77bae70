// Export all instruction modules

pub mod initialize_poll;
pub mod initialize_candidate;
pub mod vote;

// Re-export the instruction structs for easy access
pub use initialize_poll::*;
pub use initialize_candidate::*;
pub use vote::*;
