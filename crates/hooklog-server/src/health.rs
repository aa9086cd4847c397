use actix_web::{http::StatusCode, web, HttpResponse};
use tracing::warn;

use crate::server::AppContext;

pub(crate) async fn health_check_route(ctx: web::Data<AppContext>) -> HttpResponse {
    let database_status = match ctx.db_service.health_check().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, message = "Database health check failed");
            false
        }
    };

    let status_code = if database_status {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    HttpResponse::build(status_code).json(serde_json::json!({
        "database": database_status,
    }))
}
