//! Client for the attendance backend.
//!
//! Five endpoints, all POST, all answering with JSON arrays:
//!
//! | endpoint | body |
//! |---|---|
//! | `api/Users/authenticate` | JSON credentials |
//! | `api/Users/forceLogout` | JSON user id + token |
//! | `api/recursoshumanos/proyectosmovil` | form |
//! | `api/recursoshumanos/agregarActualizarAsistenciaMovil` | form |
//! | `api/recursoshumanos/listarAsistenciaMovil` | form |

mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    ApiResponse, AttendanceQuery, ForceLogoutRequest, ForceLogoutResponse, LoginRequest,
    LoginResponse,
};
