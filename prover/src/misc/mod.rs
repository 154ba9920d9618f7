//! Miscellaneous items that do not belong to any one component.

pub mod log;
