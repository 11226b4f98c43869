pub mod app;
pub mod fetch;
pub mod logparse;
pub mod ui;
