//! Command implementations

pub mod delete_org;
pub mod package;
pub mod scratch_org;
pub mod set_variable;
