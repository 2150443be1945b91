use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::{
        audit_log_handler::person_audit_trail_handler,
        person_handler::{
            deactivate_person_handler, find_person_by_email_handler, get_all_persons_handler,
            get_person_handler, reactivate_person_handler, submit_profile_change_handler,
            update_notification_settings_handler,
        },
        representation_handler::{list_representations_handler, representation_hours_handler},
        review_handler::review_person_handler,
        training_handler::{
            list_training_handler, record_training_handler, training_points_handler,
        },
    },
    services::{
        audit_log_service::AuditLogService, person_service::PersonService,
        representation_service::RepresentationService, review_service::ReviewService,
        training_service::TrainingService,
    },
};

pub fn configure_person_routes(
    cfg: &mut web::ServiceConfig,
    person_service_data: web::Data<Arc<PersonService>>,
    review_service_data: web::Data<Arc<ReviewService>>,
    audit_log_service_data: web::Data<Arc<AuditLogService>>,
    training_service_data: web::Data<Arc<TrainingService>>,
    representation_service_data: web::Data<Arc<RepresentationService>>,
) {
    cfg.service(
        web::scope("/persons")
            .wrap(configure_cors())
            .app_data(person_service_data)
            .app_data(review_service_data)
            .app_data(audit_log_service_data)
            .app_data(training_service_data)
            .app_data(representation_service_data)
            .route("", web::get().to(get_all_persons_handler))
            .route("/lookup", web::get().to(find_person_by_email_handler))
            .route("/{id}", web::get().to(get_person_handler))
            .route("/{id}/review", web::post().to(review_person_handler))
            .route(
                "/{id}/profile-change",
                web::post().to(submit_profile_change_handler),
            )
            .route(
                "/{id}/notification-settings",
                web::put().to(update_notification_settings_handler),
            )
            .route("/{id}/deactivate", web::post().to(deactivate_person_handler))
            .route("/{id}/reactivate", web::post().to(reactivate_person_handler))
            .route("/{id}/audit", web::get().to(person_audit_trail_handler))
            .route("/{id}/training", web::post().to(record_training_handler))
            .route("/{id}/training", web::get().to(list_training_handler))
            .route(
                "/{id}/training/points/{year}",
                web::get().to(training_points_handler),
            )
            .route(
                "/{id}/representations",
                web::get().to(list_representations_handler),
            )
            .route(
                "/{id}/representation-hours",
                web::get().to(representation_hours_handler),
            ),
    );
}
