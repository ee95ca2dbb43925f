//! Calendar utilities for the generation run

pub mod calendar;
