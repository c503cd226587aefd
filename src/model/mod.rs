//! Instances built from schemas
//!
//! - [`Instance`]: accepted field mapping bound to its schema
//! - [`HashKey`]: set-membership key, derivable only for frozen instances
//!   holding scalar values
//! - [`InstanceSet`]: hash-based set that refuses unhashable instances

mod hash;
mod instance;
mod set;

pub use hash::{HashAtom, HashKey};
pub use instance::Instance;
pub use set::InstanceSet;
