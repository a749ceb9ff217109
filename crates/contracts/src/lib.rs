//! Types and client-side logic shared by the survey admin frontend
//!
//! Everything here is target independent, so the resource table controller
//! can be exercised natively.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
