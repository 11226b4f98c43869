//! Plain-text output of the job summary

pub mod summary;
