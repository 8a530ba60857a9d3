pub mod assistant;
pub mod catalog;
pub mod console;
pub mod crypto;
pub mod notify;
pub mod storage;
