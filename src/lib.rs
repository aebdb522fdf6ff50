pub mod banner;
pub mod catalog;
pub mod commands;
pub mod consts;
pub mod dashboard;
pub mod events;
pub mod responder;
pub mod session;
pub mod spinner;
pub mod task;
pub mod transcript;
pub mod weather;
