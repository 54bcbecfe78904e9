//! HTTP client adapter, the single point of egress to the backend.
//!
//! Responsibilities: fixed base URL, bearer token from persistent storage
//! on every request, the four verbs plus multipart submission with the
//! `_method=PUT` override, and centralized response-envelope normalization.
//! No retries, no token refresh, no caching; a 401/419 surfaces as an
//! ordinary error the caller hands to the session layer.

pub mod abort;
pub mod error;

pub use abort::RequestScope;
pub use error::ApiError;

use contracts::shared::descriptor::{
    AdminResource, ResourceDescriptor, SelectSource, UpdateStrategy, METHOD_OVERRIDE_FIELD,
};
use contracts::shared::envelope;
use contracts::shared::form::FormValues;
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::{AbortSignal, File, FormData};

/// Backend API root derived from the current window location; the REST
/// service listens on port 8000 behind `/api`.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000/api", protocol, hostname)
}

fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach the bearer credential when a token is persisted.
fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match crate::system::auth::storage::auth_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::from_response(&response).await)
    }
}

async fn read_value(response: Response) -> Result<serde_json::Value, ApiError> {
    expect_ok(response)
        .await?
        .json::<serde_json::Value>()
        .await
        .map_err(ApiError::transport)
}

/// Collection read, envelope-normalized: `{ data: [...] }`, a bare array,
/// or a single bare object all come back as a `Vec`.
pub async fn fetch_collection<T: AdminResource>(
    signal: Option<&AbortSignal>,
) -> Result<Vec<T>, ApiError> {
    let d = T::descriptor();
    let response = authorize(Request::get(&api_url(&d.collection_path())))
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await
        .map_err(ApiError::transport)?;
    let payload = read_value(response).await?;
    envelope::decode_collection(payload).map_err(ApiError::decode)
}

/// Single-record read, envelope-normalized.
pub async fn fetch_record<T: AdminResource>(
    id: i64,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    let d = T::descriptor();
    let response = authorize(Request::get(&api_url(&d.record_path(id))))
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await
        .map_err(ApiError::transport)?;
    let payload = read_value(response).await?;
    envelope::decode_record(payload).map_err(ApiError::decode)
}

fn multipart_body(
    descriptor: &ResourceDescriptor,
    values: &FormValues,
    file: Option<&File>,
    method_override: bool,
) -> Result<FormData, ApiError> {
    let form = FormData::new().map_err(ApiError::js)?;
    for field in descriptor.fields {
        form.append_with_str(field.key, values.get(field.key))
            .map_err(ApiError::js)?;
    }
    // An unchanged media field is omitted entirely; the backend keeps the
    // stored file.
    if let (Some(media), Some(file)) = (&descriptor.media, file) {
        form.append_with_blob(media.field, file).map_err(ApiError::js)?;
    }
    if method_override {
        form.append_with_str(METHOD_OVERRIDE_FIELD, "PUT")
            .map_err(ApiError::js)?;
    }
    Ok(form)
}

/// Create a record: JSON POST, or multipart when the entity has a media
/// field.
pub async fn create_record<T: AdminResource>(
    values: &FormValues,
    file: Option<&File>,
) -> Result<(), ApiError> {
    let d = T::descriptor();
    let builder = authorize(Request::post(&api_url(&d.create_path())))
        .header("Accept", "application/json");

    let response = if d.media.is_some() {
        let body = multipart_body(d, values, file, false)?;
        builder.body(body).map_err(ApiError::transport)?
    } else {
        builder
            .json(&values.to_json(d.fields))
            .map_err(ApiError::transport)?
    }
    .send()
    .await
    .map_err(ApiError::transport)?;

    expect_ok(response).await.map(|_| ())
}

/// Full-field overwrite of an existing record. The transport follows the
/// descriptor: multipart POST carrying `_method=PUT`, or a native PUT
/// (multipart when a media field exists, JSON otherwise).
pub async fn update_record<T: AdminResource>(
    id: i64,
    values: &FormValues,
    file: Option<&File>,
) -> Result<(), ApiError> {
    let d = T::descriptor();
    let url = api_url(&d.mutate_path(id));

    let request = match d.update {
        UpdateStrategy::MethodOverride => {
            let body = multipart_body(d, values, file, true)?;
            authorize(Request::post(&url))
                .header("Accept", "application/json")
                .body(body)
                .map_err(ApiError::transport)?
        }
        UpdateStrategy::NativePut => {
            let builder = authorize(Request::put(&url)).header("Accept", "application/json");
            if d.media.is_some() {
                let body = multipart_body(d, values, file, false)?;
                builder.body(body).map_err(ApiError::transport)?
            } else {
                builder
                    .json(&values.to_json(d.fields))
                    .map_err(ApiError::transport)?
            }
        }
    };

    let response = request.send().await.map_err(ApiError::transport)?;
    expect_ok(response).await.map(|_| ())
}

pub async fn delete_record<T: AdminResource>(id: i64) -> Result<(), ApiError> {
    let d = T::descriptor();
    let response = authorize(Request::delete(&api_url(&d.mutate_path(id))))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(ApiError::transport)?;
    expect_ok(response).await.map(|_| ())
}

/// Load `(value, label)` pairs for a select field from its referenced
/// resource.
pub async fn fetch_select_options(
    source: &SelectSource,
    signal: Option<&AbortSignal>,
) -> Result<Vec<(String, String)>, ApiError> {
    let path = if source.admin {
        format!("/admin/{}", source.resource)
    } else {
        format!("/{}", source.resource)
    };
    let response = authorize(Request::get(&api_url(&path)))
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await
        .map_err(ApiError::transport)?;
    let payload = read_value(response).await?;
    let rows: Vec<serde_json::Value> =
        envelope::decode_collection(payload).map_err(ApiError::decode)?;

    Ok(rows
        .into_iter()
        .filter_map(|row| {
            let value = row.get("id")?.as_i64()?.to_string();
            let label = row.get(source.label_field)?.as_str()?.to_string();
            Some((value, label))
        })
        .collect())
}

/// Collection size for the dashboard cards.
pub async fn count_records(
    descriptor: &ResourceDescriptor,
    signal: Option<&AbortSignal>,
) -> Result<usize, ApiError> {
    let response = authorize(Request::get(&api_url(&descriptor.collection_path())))
        .header("Accept", "application/json")
        .abort_signal(signal)
        .send()
        .await
        .map_err(ApiError::transport)?;
    let payload = read_value(response).await?;
    let rows: Vec<serde_json::Value> =
        envelope::decode_collection(payload).map_err(ApiError::decode)?;
    Ok(rows.len())
}

pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response = Request::post(&api_url("/admin/login"))
        .header("Accept", "application/json")
        .json(request)
        .map_err(ApiError::transport)?
        .send()
        .await
        .map_err(ApiError::transport)?;
    expect_ok(response)
        .await?
        .json::<LoginResponse>()
        .await
        .map_err(ApiError::transport)
}
