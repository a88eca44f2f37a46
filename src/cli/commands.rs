pub mod attendance;
pub mod config;
pub mod init;
pub mod log;
pub mod login;
pub mod logout;
pub mod mark;
pub mod projects;
pub mod scan;
pub mod session;
