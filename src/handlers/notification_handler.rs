use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    handlers::{parse_object_id, portal_error_response},
    services::notification_service::NotificationService,
    types::responses::api_response::ApiResponse,
    utils::locale_utils::{Messages, Namespace, get_lang},
};

pub async fn list_notifications_handler(
    req: HttpRequest,
    notification_service: web::Data<Arc<NotificationService>>,
    user_id: web::Path<String>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let user_id = match parse_object_id(&user_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match notification_service.list_for_user(&user_id).await {
        Ok(notifications) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Notification,
                "list.success",
                "Notifications fetched successfully.",
            ),
            notifications,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn mark_notification_read_handler(
    req: HttpRequest,
    notification_service: web::Data<Arc<NotificationService>>,
    notification_id: web::Path<String>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let notification_id = match parse_object_id(&notification_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match notification_service
        .mark_read(&notification_id, &messages)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message_only(messages.get_str(
            Namespace::Notification,
            "mark_read.success",
            "Notification marked as read.",
        ))),
        Err(err) => portal_error_response(&err),
    }
}
