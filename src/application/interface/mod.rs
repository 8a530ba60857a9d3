pub mod assistant;
pub mod crypto;
pub mod gateway;
pub mod notify;
pub mod storage;
