pub mod starter;
pub mod static_catalog;
