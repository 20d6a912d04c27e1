//! REST API helpers for the league backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since every endpoint needs the
//! browser-held auth token.
//!
//! ERROR HANDLING
//! ==============
//! `Err` means the request never completed (network failure). HTTP-level
//! rejections still resolve to `Ok` carrying the status flag and the body,
//! because several endpoints put their real error detail in the body and the
//! pages decide per-screen what a rejection means.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::{Value, json};

/// Base URL of the league backend, fixed at compile time.
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:8000/api",
};

/// Decoded JSON response: HTTP-level success plus the parsed body.
///
/// A body that fails to parse is represented as `{}` so the tolerant
/// normalizer can still run on it.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub ok: bool,
    pub body: Value,
}

/// Raw-text response used by the auth endpoints, which answer with either a
/// bare token string or a small JSON envelope around one.
#[derive(Clone, Debug)]
pub struct ApiText {
    pub ok: bool,
    pub body: String,
}

/// Authenticate via `POST /F1/Users/loginUser`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent.
pub async fn login_user(email: &str, password: &str) -> Result<ApiText, String> {
    #[cfg(feature = "hydrate")]
    {
        post_text("/F1/Users/loginUser", &login_payload(email, password)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /F1/Users/registerUser`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent.
pub async fn register_user(full_name: &str, email: &str, password: &str) -> Result<ApiText, String> {
    #[cfg(feature = "hydrate")]
    {
        post_text(
            "/F1/Users/registerUser",
            &register_payload(full_name, email, password),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (full_name, email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the raw league-listing payload via `POST /F1/Users/checkUser2League`.
///
/// The body is decoded regardless of the HTTP status; the normalizer maps
/// unusable shapes to an empty list, so a status check would only lose
/// information here.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or the body is
/// not JSON.
pub async fn fetch_user_leagues(token: &str) -> Result<Value, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post(&endpoint("/F1/Users/checkUser2League"), &token_payload(token)).await?;
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Create a league via `POST /F1/League/createLeague`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent.
pub async fn create_league(
    token: &str,
    name: &str,
    description: &str,
) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/F1/League/createLeague",
            &json!({"token": token, "name": name, "description": description}),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, name, description);
        Err("not available on server".to_owned())
    }
}

/// Join a league by invite code via `POST /F1/League/joinLeague`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent.
pub async fn join_league(token: &str, code: &str) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/F1/League/joinLeague", &json!({"token": token, "code": code})).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, code);
        Err("not available on server".to_owned())
    }
}

/// Fetch one league's detail via `POST /F1/League/getActiveLeagueDetails`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent.
pub async fn fetch_league_detail(token: &str, league_id: &str) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/F1/League/getActiveLeagueDetails",
            &detail_payload(token, league_id),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, league_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the full driver roster via `POST /F1/Drivers/getAllDrivers`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent.
pub async fn fetch_drivers(token: &str) -> Result<ApiResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/F1/Drivers/getAllDrivers", &token_payload(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Pull an auth token out of an auth-endpoint body.
///
/// The backend answers these with either a JSON-encoded string, a JSON
/// envelope carrying a `token` field, or the bare token text. Empty bodies
/// and empty tokens resolve to `None`.
pub fn token_from_body(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(inner)) => (!inner.is_empty()).then_some(inner),
        Ok(envelope) => ["token", "auth_token"]
            .iter()
            .filter_map(|key| envelope.get(key))
            .chain(envelope.get("data").and_then(|data| data.get("token")))
            .filter_map(Value::as_str)
            .find(|token| !token.is_empty())
            .map(str::to_owned),
        Err(_) => Some(trimmed.to_owned()),
    }
}

/// Rejection text for a completed request, or `None` when it succeeded.
///
/// The backend signals failure both through HTTP status and through
/// `status == "error"` bodies on 2xx responses; both count. The body's
/// `message` wins over the caller's fallback when present.
pub fn rejection_message(response: &ApiResponse, fallback: &str) -> Option<String> {
    let status_error = response.body.get("status").and_then(Value::as_str) == Some("error");
    if response.ok && !status_error {
        return None;
    }
    let message = response
        .body
        .get("message")
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .unwrap_or(fallback);
    Some(message.to_owned())
}

fn endpoint(path: &str) -> String {
    format!("{BACKEND_URL}{path}")
}

fn token_payload(token: &str) -> Value {
    json!({"token": token})
}

fn detail_payload(token: &str, league_id: &str) -> Value {
    json!({
        "token": token,
        "jsonData": json!({"league_id": league_id}).to_string(),
    })
}

fn login_payload(email: &str, password: &str) -> Value {
    json!({"jsonData": json!({"email": email, "password": password}).to_string()})
}

fn register_payload(full_name: &str, email: &str, password: &str) -> Value {
    json!({
        "jsonData": json!({
            "fullName": full_name,
            "email": email,
            "password": password,
        })
        .to_string(),
    })
}

#[cfg(feature = "hydrate")]
async fn post(url: &str, payload: &Value) -> Result<gloo_net::http::Response, String> {
    gloo_net::http::Request::post(url)
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json(path: &str, payload: &Value) -> Result<ApiResponse, String> {
    let resp = post(&endpoint(path), payload).await?;
    let ok = resp.ok();
    let body = resp.json().await.unwrap_or_else(|_| json!({}));
    Ok(ApiResponse { ok, body })
}

#[cfg(feature = "hydrate")]
async fn post_text(path: &str, payload: &Value) -> Result<ApiText, String> {
    let resp = post(&endpoint(path), payload).await?;
    let ok = resp.ok();
    let body = resp.text().await.unwrap_or_default();
    Ok(ApiText { ok, body })
}
