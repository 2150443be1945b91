use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::{
        audit_log_handler::recent_audit_handler,
        notification_handler::{list_notifications_handler, mark_notification_read_handler},
        outbox_handler::dispatch_outbox_handler,
        representation_handler::schedule_representation_handler,
        template_handler::{
            get_template_handler, list_templates_handler, upload_template_handler,
        },
    },
    services::{
        audit_log_service::AuditLogService, notification_service::NotificationService,
        outbox_service::OutboxService, representation_service::RepresentationService,
        template_service::TemplateService,
    },
};

pub fn configure_portal_routes(
    cfg: &mut web::ServiceConfig,
    notification_service_data: web::Data<Arc<NotificationService>>,
    template_service_data: web::Data<Arc<TemplateService>>,
    representation_service_data: web::Data<Arc<RepresentationService>>,
    audit_log_service_data: web::Data<Arc<AuditLogService>>,
    outbox_service_data: web::Data<Arc<OutboxService>>,
) {
    cfg.service(
        web::scope("/notifications")
            .wrap(configure_cors())
            .app_data(notification_service_data)
            .route("/user/{user_id}", web::get().to(list_notifications_handler))
            .route("/{id}/read", web::patch().to(mark_notification_read_handler)),
    );

    cfg.service(
        web::scope("/templates")
            .wrap(configure_cors())
            .app_data(template_service_data)
            .route("", web::post().to(upload_template_handler))
            .route("", web::get().to(list_templates_handler))
            .route("/{id}", web::get().to(get_template_handler)),
    );

    cfg.service(
        web::scope("/representations")
            .wrap(configure_cors())
            .app_data(representation_service_data)
            .route("", web::post().to(schedule_representation_handler)),
    );

    cfg.service(
        web::scope("/admin")
            .wrap(configure_cors())
            .app_data(audit_log_service_data)
            .app_data(outbox_service_data)
            .route("/audit/recent", web::get().to(recent_audit_handler))
            .route("/outbox/dispatch", web::post().to(dispatch_outbox_handler)),
    );
}
