use std::sync::Arc;
use actix_web::{web, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::api::api::api_service_log;
use crate::api::structs::api_service_data::ApiServiceData;

#[tracing::instrument(level = "debug")]
pub async fn api_service_files_get(request: HttpRequest, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_service_log(&request);
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "ok",
        "files": data.tracker.dump()
    }))
}

#[tracing::instrument(level = "debug")]
pub async fn api_service_file_get(request: HttpRequest, path: web::Path<String>, data: Data<Arc<ApiServiceData>>) -> HttpResponse
{
    api_service_log(&request);
    let file_name = path.into_inner();
    match data.tracker.get_file_report(&file_name) {
        Ok(peers) => HttpResponse::Ok().content_type(ContentType::json()).json(json!({
            "status": "ok",
            "file_name": file_name,
            "peers": peers
        })),
        Err(_) => HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
            "status": "no such file"
        })),
    }
}
