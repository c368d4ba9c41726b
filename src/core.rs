// src/core.rs
pub mod aggregate;
pub mod classify;
pub mod count;
pub mod report;
pub mod walk;
