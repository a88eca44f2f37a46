pub mod attendance;
pub mod attendance_type;
pub(crate) mod de;
pub mod login_state;
pub mod project;
pub mod project_status;
pub mod qr;
pub mod session;
