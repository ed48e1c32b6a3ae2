// Handler modules
pub mod inspect;
pub mod utils;

// Re-export all handler functions
pub use inspect::{InspectOptions, handle_inspect_dataset, inspect_dataset};
pub use utils::{handle_scenarios, handle_version};
