pub mod app_error_impl;
pub mod command;
pub mod dashboard;
pub mod render;
