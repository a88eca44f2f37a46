use crate::api::types::LoginResponse;

/// Progress of a login attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginState {
    Idle,
    Loading,
    Success(Box<LoginResponse>),
    Error(String),
}
