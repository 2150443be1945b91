use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    handlers::{parse_object_id, portal_error_response},
    services::audit_log_service::AuditLogService,
    types::responses::api_response::ApiResponse,
    utils::locale_utils::{Messages, Namespace, get_lang},
};

#[derive(Debug, Deserialize)]
pub struct RecentAuditQuery {
    pub limit: Option<i64>,
}

pub async fn person_audit_trail_handler(
    req: HttpRequest,
    audit_log_service: web::Data<Arc<AuditLogService>>,
    person_id: web::Path<String>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let person_id = match parse_object_id(&person_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match audit_log_service.list_for_person(&person_id).await {
        Ok(entries) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "audit.fetch_success",
                "Audit trail fetched successfully.",
            ),
            entries,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn recent_audit_handler(
    req: HttpRequest,
    audit_log_service: web::Data<Arc<AuditLogService>>,
    query: web::Query<RecentAuditQuery>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    match audit_log_service.list_recent(query.limit).await {
        Ok(entries) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "audit.fetch_success",
                "Audit trail fetched successfully.",
            ),
            entries,
        )),
        Err(err) => portal_error_response(&err),
    }
}
