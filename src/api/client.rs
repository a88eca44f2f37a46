use super::types::{
    ApiResponse, AttendanceQuery, ForceLogoutRequest, ForceLogoutResponse, LoginRequest,
    LoginResponse,
};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::{AttendanceRecord, AttendanceSubmission};
use crate::models::project::Project;
use reqwest::header::{AUTHORIZATION, HOST, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const AUTHENTICATE: &str = "api/Users/authenticate";
const FORCE_LOGOUT: &str = "api/Users/forceLogout";
const LIST_PROJECTS: &str = "api/recursoshumanos/proyectosmovil";
const REGISTER_ATTENDANCE: &str = "api/recursoshumanos/agregarActualizarAsistenciaMovil";
const LIST_ATTENDANCES: &str = "api/recursoshumanos/listarAsistenciaMovil";

const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// HTTP client for the attendance backend.
///
/// Without a token only [`ApiClient::authenticate`] is useful; every other
/// endpoint needs [`ApiClient::with_token`].
pub struct ApiClient {
    http: Client,
    base_url: Url,
    token: Option<String>,
}

fn header_value(v: &str) -> AppResult<HeaderValue> {
    HeaderValue::from_str(v).map_err(|e| AppError::Config(format!("invalid header value '{v}': {e}")))
}

fn parse_base_url(raw: &str) -> AppResult<Url> {
    if raw.trim().is_empty() {
        return Err(AppError::InvalidUrl("URL cannot be empty".into()));
    }

    // Url::join drops the last path segment unless the base ends with '/'
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };

    let url = Url::parse(&with_slash).map_err(|e| AppError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(AppError::InvalidUrl(format!(
            "unsupported scheme '{other}', use http:// or https://"
        ))),
    }
}

impl ApiClient {
    pub fn new(cfg: &Config) -> AppResult<Self> {
        let base_url = parse_base_url(&cfg.base_url)?;

        let mut headers = HeaderMap::new();
        if !cfg.host_header.is_empty() {
            headers.insert(HOST, header_value(&cfg.host_header)?);
        }
        if !cfg.forwarded_host.is_empty() {
            headers.insert(
                HeaderName::from_static(X_FORWARDED_HOST),
                header_value(&cfg.forwarded_host)?,
            );
        }

        let http = Client::builder()
            .default_headers(headers)
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(format!("qrattend/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            token: None,
        })
    }

    /// Attach a bearer token to every subsequent request.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    fn post(&self, endpoint: &str) -> AppResult<RequestBuilder> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| AppError::InvalidUrl(e.to_string()))?;
        debug!(url = %url, authenticated = self.token.is_some(), "POST");

        let mut req = self.http.post(url);
        if let Some(token) = &self.token {
            req = req.header(AUTHORIZATION, header_value(&format!("Bearer {token}"))?);
        }
        Ok(req)
    }

    async fn send(req: RequestBuilder) -> AppResult<Response> {
        let response = req.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                AppError::Unreachable(e.to_string())
            } else {
                AppError::Http(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let code = status.as_u16();
        let body = response.text().await.unwrap_or_default();
        warn!(status = code, body = %body, "request rejected by server");

        Err(match code {
            401 => AppError::Unauthorized(code),
            403 => AppError::Forbidden(code),
            404 => AppError::EndpointNotFound(code),
            _ => AppError::Status {
                status: code,
                message: if body.is_empty() {
                    status.canonical_reason().unwrap_or("").to_string()
                } else {
                    body
                },
            },
        })
    }

    async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> AppResult<T> {
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::Parse(format!("{what}: {e}")))
    }

    /// Exchange credentials for a session. An empty list means wrong credentials.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<Vec<LoginResponse>> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        debug!(username = %username, "Attempting login");

        let response = Self::send(self.post(AUTHENTICATE)?.json(&request)).await?;
        let users: Vec<LoginResponse> = Self::read_json(response, "login response").await?;

        info!(matches = users.len(), "Authenticate answered");
        Ok(users)
    }

    /// Invalidate a token on the server. The endpoint may answer with an empty body.
    pub async fn force_logout(&self, user_id: i64, token: &str) -> AppResult<Option<ForceLogoutResponse>> {
        let request = ForceLogoutRequest {
            id_usuario: user_id,
            token: token.to_string(),
        };

        let response = Self::send(self.post(FORCE_LOGOUT)?.json(&request)).await?;
        let body = response.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }

        let parsed = serde_json::from_str(&body)
            .map_err(|e| AppError::Parse(format!("logout response: {e}")))?;
        Ok(Some(parsed))
    }

    /// Flat list of group headers and projects visible to `user_id`.
    pub async fn list_projects(&self, user_id: &str, source: &str) -> AppResult<Vec<Project>> {
        let form = [("id_usuario", user_id), ("fuente", source)];

        let response = Self::send(self.post(LIST_PROJECTS)?.form(&form)).await?;
        let projects: Vec<Project> = Self::read_json(response, "project list").await?;

        debug!(count = projects.len(), "Projects received");
        Ok(projects)
    }

    pub async fn register_attendance(&self, submission: &AttendanceSubmission) -> AppResult<Vec<ApiResponse>> {
        info!(
            project = %submission.project_id,
            user = %submission.user_id,
            kind = %submission.attendance_type,
            at = %submission.timestamp,
            "Registering attendance"
        );

        let response = Self::send(self.post(REGISTER_ATTENDANCE)?.form(submission)).await?;
        Self::read_json(response, "registration response").await
    }

    pub async fn list_attendances(&self, query: &AttendanceQuery) -> AppResult<Vec<AttendanceRecord>> {
        let response = Self::send(self.post(LIST_ATTENDANCES)?.form(query)).await?;
        let rows: Vec<AttendanceRecord> = Self::read_json(response, "attendance list").await?;

        debug!(count = rows.len(), project = %query.project_id, day = %query.from, "Attendances received");
        Ok(rows)
    }
}
