//! Domain Layer - Core Entity Trait
//!
//! Every stored record has a unique, copyable identifier.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Core trait for catalog entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + Hash + Debug + Display;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}
