use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub total: Option<i64>,
}

impl Meta {
    pub fn count(total: i64) -> Self {
        Self { total: Some(total) }
    }

    pub fn empty() -> Self {
        Self { total: None }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

/// Status tag carried by every mutating operation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    #[default]
    Unset,
    Created,
    Updated,
    Deleted,
    NotFound,
    Error,
}

/// Uniform result of a mutating operation. `created_id` is populated only on
/// Created; `messages` is empty on unambiguous success.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct ServiceOutcome {
    pub status: ServiceStatus,
    pub created_id: Option<i32>,
    pub messages: Vec<String>,
}

impl ServiceOutcome {
    pub fn created(id: i32) -> Self {
        Self {
            status: ServiceStatus::Created,
            created_id: Some(id),
            messages: Vec::new(),
        }
    }

    pub fn updated() -> Self {
        Self {
            status: ServiceStatus::Updated,
            ..Default::default()
        }
    }

    pub fn deleted() -> Self {
        Self {
            status: ServiceStatus::Deleted,
            ..Default::default()
        }
    }

    pub fn not_found(messages: impl IntoIterator<Item = String>) -> Self {
        Self {
            status: ServiceStatus::NotFound,
            created_id: None,
            messages: messages.into_iter().collect(),
        }
    }

    pub fn error(messages: impl IntoIterator<Item = String>) -> Self {
        Self {
            status: ServiceStatus::Error,
            created_id: None,
            messages: messages.into_iter().collect(),
        }
    }

    /// Map the outcome onto transport codes. `resource_base` builds the
    /// Location header for newly created resources.
    pub fn into_http(self, resource_base: &str) -> Response {
        match self.status {
            ServiceStatus::Created => {
                let location = self
                    .created_id
                    .map(|id| format!("{resource_base}/{id}"))
                    .and_then(|loc| HeaderValue::from_str(&loc).ok());
                let body = ApiResponse {
                    message: "Created".to_string(),
                    data: Some(self),
                    meta: Some(Meta::empty()),
                };
                let mut response = (StatusCode::CREATED, Json(body)).into_response();
                if let Some(location) = location {
                    response.headers_mut().insert(header::LOCATION, location);
                }
                response
            }
            ServiceStatus::Updated | ServiceStatus::Deleted => {
                StatusCode::NO_CONTENT.into_response()
            }
            ServiceStatus::NotFound => {
                let body = ApiResponse {
                    message: "Not Found".to_string(),
                    data: Some(self),
                    meta: Some(Meta::empty()),
                };
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
            ServiceStatus::Error | ServiceStatus::Unset => {
                let body = ApiResponse {
                    message: "Error".to_string(),
                    data: Some(self),
                    meta: Some(Meta::empty()),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
