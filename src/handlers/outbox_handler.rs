use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    handlers::portal_error_response,
    services::outbox_service::OutboxService,
    types::responses::api_response::ApiResponse,
    utils::locale_utils::{Messages, Namespace, get_lang},
};

/// Administrative re-drive of undelivered side effects.
pub async fn dispatch_outbox_handler(
    req: HttpRequest,
    outbox_service: web::Data<Arc<OutboxService>>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    match outbox_service.dispatch_pending().await {
        Ok(report) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "outbox.dispatch_success",
                "Pending side effects dispatched.",
            ),
            report,
        )),
        Err(err) => portal_error_response(&err),
    }
}
