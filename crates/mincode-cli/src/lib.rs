pub mod commands;
pub mod report;
pub mod trace_init;
