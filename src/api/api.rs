use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use serde_json::json;
use crate::api::api_files::{api_service_file_get, api_service_files_get};
use crate::api::api_requests::api_service_requests_get;
use crate::api::api_stats::api_service_stats_get;
use crate::api::structs::api_service_data::ApiServiceData;

pub fn api_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn api_service_routes(data: Arc<ApiServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.default_service(web::route().to(api_service_not_found));
        cfg.service(web::resource("api/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("api/files").route(web::get().to(api_service_files_get)));
        cfg.service(web::resource("api/files/{file_name}").route(web::get().to(api_service_file_get)));
        cfg.service(web::resource("api/requests").route(web::get().to(api_service_requests_get)));
    })
}

/// Builds the API server for one `[[api_server]]` entry.
///
/// The returned future runs the server; the handle stops it.
pub async fn api_service(
    addr: SocketAddr,
    data: Arc<ApiServiceData>,
    keep_alive: u64,
    client_request_timeout: u64,
    client_disconnect_timeout: u64,
    threads: u64,
) -> std::io::Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>)>
{
    info!("[API] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(api_service_cors())
            .configure(api_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(client_request_timeout))
        .client_disconnect_timeout(Duration::from_secs(client_disconnect_timeout))
        .workers(threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub fn api_service_log(request: &HttpRequest)
{
    match request.peer_addr() {
        Some(peer_addr) => debug!("[API] {} {} from {peer_addr}", request.method(), request.path()),
        None => debug!("[API] {} {}", request.method(), request.path()),
    }
}

pub async fn api_service_not_found(request: HttpRequest) -> HttpResponse
{
    api_service_log(&request);
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "status": "not found"
    }))
}
