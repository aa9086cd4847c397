//! Webhook handlers.

#[cfg(test)]
mod tests;

use actix_web::{web, HttpRequest, HttpResponse, Result as ActixResult};
use hooklog_core::use_cases::events::{IngestWebhookEventInterface, ListEventRecordsInterface};
use shaku::HasComponent;
use tracing::debug;

use crate::{
    constants::GITHUB_EVENT_HEADER, server::AppContext, utils::convert_payload_to_string,
    ServerError,
};

fn extract_event_type_from_request(req: &HttpRequest) -> String {
    req.headers()
        .get(GITHUB_EVENT_HEADER)
        .and_then(|x| x.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

#[tracing::instrument(skip_all, fields(event_type))]
pub(crate) async fn receiver(
    req: HttpRequest,
    mut payload: web::Payload,
    ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    let event_type = extract_event_type_from_request(&req);
    tracing::Span::current().record("event_type", event_type.as_str());

    let body = convert_payload_to_string(&mut payload)
        .await
        .map_err(|e| ServerError::PayloadError {
            message: e.to_string(),
        })?;

    let core_ctx = ctx.as_core_context();
    let ingest: &dyn IngestWebhookEventInterface = core_ctx.core_module.resolve_ref();
    let record = ingest
        .run(&core_ctx, &event_type, &body)
        .await
        .map_err(|e| ServerError::DomainError { source: e })?;

    debug!(
        id = record.id,
        action = %record.action,
        message = "Webhook event stored"
    );

    Ok(HttpResponse::Ok().json(serde_json::json!({})))
}

#[tracing::instrument(skip_all)]
pub(crate) async fn data(ctx: web::Data<AppContext>) -> ActixResult<HttpResponse> {
    let core_ctx = ctx.as_core_context();
    let list: &dyn ListEventRecordsInterface = core_ctx.core_module.resolve_ref();
    let summary = list
        .run(&core_ctx)
        .await
        .map_err(|e| ServerError::DomainError { source: e })?;

    Ok(HttpResponse::Ok().json(summary))
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.route("/receiver", web::post().to(receiver))
        .route("/data", web::get().to(data));
}
