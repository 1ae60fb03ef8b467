// Unit tests for the public library surface
//
// Organized by module:
// - report: value formatters and the display record

mod report;
