pub mod chat;
pub mod recommendations;
pub mod session;
pub mod skills;
pub mod subjects;
