//! This module contains numeric functionality shared by the selection algorithms.

mod linalg;
pub use self::linalg::*;
