pub mod chat;
pub mod id;
pub mod profile;
pub mod recommendation;
pub mod semester;
pub mod session;
pub mod skill;
pub mod subject;
pub mod user;
