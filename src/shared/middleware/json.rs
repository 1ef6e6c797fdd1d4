use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{request::Parts, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

/// JSON 요청 본문 (파싱 실패 시 `{"error": ...}` 응답)
/// Parser detail only reaches the debug log.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(json_rejection(rejection)),
        }
    }
}

/// 쿼리 파라미터 (파싱 실패 시 `{"error": ...}` 응답)
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(query_rejection(rejection)),
        }
    }
}

fn json_rejection(rejection: JsonRejection) -> (StatusCode, Json<serde_json::Value>) {
    let status = rejection.status();
    tracing::debug!(error = %rejection.body_text(), status = status.as_u16(), "request body rejected");

    let message = match rejection {
        JsonRejection::MissingJsonContentType(_) => "Expected Content-Type: application/json",
        _ => "Invalid request body",
    };
    (status, Json(json!({ "error": message })))
}

fn query_rejection(rejection: QueryRejection) -> (StatusCode, Json<serde_json::Value>) {
    tracing::debug!(error = %rejection.body_text(), "query string rejected");
    (StatusCode::BAD_REQUEST, Json(json!({ "error": "Invalid query parameters" })))
}
