pub mod exit_responses;
pub mod resignations_table;
pub mod tabs;
