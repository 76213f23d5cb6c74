//! Display helpers over raw core values (currency, durations, timer text).

pub mod display;
