use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::api::api_service_log;
use crate::api::structs::api_service_data::ApiServiceData;

#[tracing::instrument(level = "debug")]
pub async fn api_service_requests_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_service_log(&request);
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "requests": data.tracker.get_requests()
    }))
}
