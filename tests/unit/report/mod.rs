// Unit tests for report module components
//
// - formatter: numeric formatting edge cases
// - display: display record projection

pub mod display_tests;
pub mod formatter_tests;
