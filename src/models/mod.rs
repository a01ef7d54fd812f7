// Models module for data structures
pub mod creation_report;
pub mod name_kind;
pub mod raw_input;
