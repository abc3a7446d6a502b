//! This module reimports commonly used types and functions.

pub use crate::algorithms::nsga3::ObjectiveVector;
pub use crate::algorithms::nsga3::ReferencePoint;

pub use crate::algorithms::nsga3::DominancePolicy;
pub use crate::algorithms::nsga3::Front;
pub use crate::algorithms::nsga3::sort_fronts;

pub use crate::algorithms::nsga3::generate_reference_points;

pub use crate::algorithms::nsga3::Normalizer;
pub use crate::algorithms::nsga3::normalize;

pub use crate::algorithms::nsga3::Association;
pub use crate::algorithms::nsga3::AssociationRecord;
pub use crate::algorithms::nsga3::associate;

pub use crate::utils::Float;
pub use crate::utils::compare_floats;
pub use crate::utils::{SelectionError, SelectionResult};
