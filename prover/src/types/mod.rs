//! Shared types that do not belong to any one component.

pub mod err;
