pub mod attendance;
pub mod config;
pub mod log;
pub mod login;
pub mod projects;
pub mod scan;
pub mod session;
