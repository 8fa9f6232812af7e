//! REST API helpers for communicating with the Sahay backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. A backend rejection
//! carries the `detail` string from the error body so credential and
//! validation failures can be shown verbatim; transport failures carry an
//! internal message and surface as a generic retry suggestion.

#![allow(clippy::unused_async)]

use std::fmt;

use super::types::{HelpRequest, NewHelpRequest, SignupForm, SignupResponse, TokenResponse, User};
use crate::config::api_base_url;

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status; `detail` is taken from
    /// the `{detail}` error body when present.
    Rejected { status: u16, detail: String },
    /// The backend was unreachable or returned an unreadable body.
    Transport(String),
}

impl ApiError {
    /// Text suitable for inline display: rejection details verbatim,
    /// transport failures as a generic retry suggestion.
    pub fn user_message(&self) -> &str {
        match self {
            Self::Rejected { detail, .. } => detail,
            Self::Transport(_) => "Network error. Please try again.",
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rejected { status, detail } => write!(f, "rejected ({status}): {detail}"),
            Self::Transport(msg) => write!(f, "transport error: {msg}"),
        }
    }
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Turn a non-2xx response into `ApiError::Rejected`, reading the
/// `{detail}` body when the backend sent one.
#[cfg(feature = "hydrate")]
async fn rejection(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let detail = resp
        .json::<ErrorBody>()
        .await
        .map(|body| body.detail)
        .unwrap_or_else(|_| format!("request failed with status {status}"));
    ApiError::Rejected { status, detail }
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Static path at which an uploaded request photo is served.
pub fn photo_url(filename: &str) -> String {
    format!("{}/uploads/{filename}", api_base_url())
}

#[cfg(feature = "hydrate")]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Exchange credentials for a bearer token via `POST /login`.
///
/// The backend authenticates by email but its login form names the field
/// `username` (OAuth2 password-flow convention).
///
/// # Errors
///
/// `Rejected` with the backend's `detail` on bad credentials, `Transport`
/// when the backend is unreachable.
pub async fn sign_in(email: &str, password: &str) -> Result<TokenResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Transport("FormData unavailable".to_owned()))?;
        let _ = form.append_with_str("username", email);
        let _ = form.append_with_str("password", password);

        let resp = gloo_net::http::Request::post(&format!("{}/login", api_base_url()))
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<TokenResponse>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create an account via `POST /signup`.
///
/// # Errors
///
/// `Rejected` with the backend's `detail` (e.g. email already registered).
pub async fn sign_up(form: &SignupForm) -> Result<SignupResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&format!("{}/signup", api_base_url()))
            .json(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<SignupResponse>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the profile behind a bearer token via `GET /users/me`.
///
/// # Errors
///
/// Any error means the token could not be validated; restoration callers
/// treat every failure as "not authenticated".
pub async fn fetch_profile(token: &str) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{}/users/me", api_base_url()))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<User>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// List every help request via `GET /request/`.
///
/// # Errors
///
/// Returns the underlying failure; list pages render an empty state.
pub async fn fetch_requests(token: &str) -> Result<Vec<HelpRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&format!("{}/request/", api_base_url()))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<Vec<HelpRequest>>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// List requests open to volunteers via `GET /volunteer/view-requests`.
///
/// # Errors
///
/// Returns the underlying failure; the browse page renders an empty state.
pub async fn fetch_open_requests(token: &str) -> Result<Vec<HelpRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp =
            gloo_net::http::Request::get(&format!("{}/volunteer/view-requests", api_base_url()))
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(transport)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        resp.json::<Vec<HelpRequest>>().await.map_err(transport)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create a help request via `POST /request/request-help` as a multipart
/// form, optionally attaching a photo.
///
/// # Errors
///
/// `Rejected` with the backend's `detail` on validation failure.
#[cfg(feature = "hydrate")]
pub async fn create_request(
    token: &str,
    fields: &NewHelpRequest,
    photo: Option<web_sys::File>,
) -> Result<HelpRequest, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Transport("FormData unavailable".to_owned()))?;
    let _ = form.append_with_str("title", &fields.title);
    let _ = form.append_with_str("description", &fields.description);
    let _ = form.append_with_str("location", &fields.location);
    let _ = form.append_with_str("urgency_level", fields.urgency_level.as_str());
    if let Some(file) = photo {
        let _ = form.append_with_blob("photo", &file);
    }

    let resp = gloo_net::http::Request::post(&format!("{}/request/request-help", api_base_url()))
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    if !resp.ok() {
        return Err(rejection(resp).await);
    }
    resp.json::<HelpRequest>().await.map_err(transport)
}

/// SSR stub; request creation only happens in the browser.
#[cfg(not(feature = "hydrate"))]
pub async fn create_request(
    token: &str,
    fields: &NewHelpRequest,
    photo: Option<()>,
) -> Result<HelpRequest, ApiError> {
    let _ = (token, fields, photo);
    Err(ApiError::Transport("not available on server".to_owned()))
}

/// Apply to a help request via `POST /volunteer/apply/{id}`.
///
/// # Errors
///
/// `Rejected` with the backend's `detail` (e.g. already applied).
pub async fn apply_to_request(token: &str, request_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/volunteer/apply/{request_id}", api_base_url());
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(rejection(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, request_id);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
