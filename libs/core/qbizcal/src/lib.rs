#[cfg(test)]
use rstest_reuse;

pub mod calendar;
pub mod timepoint;
