use actix_web::web;
use std::sync::Arc;

use crate::{
    config::cors::configure_cors,
    handlers::registration_handler::{
        complete_registration_handler, save_step_handler, start_registration_handler,
    },
    services::registration_service::RegistrationService,
};

pub fn configure_registration_routes(
    cfg: &mut web::ServiceConfig,
    registration_service_data: web::Data<Arc<RegistrationService>>,
) {
    cfg.service(
        web::scope("/registration")
            .wrap(configure_cors())
            .app_data(registration_service_data)
            .route("/start", web::post().to(start_registration_handler))
            .route("/{draft_id}/steps", web::put().to(save_step_handler))
            .route(
                "/{draft_id}/complete",
                web::post().to(complete_registration_handler),
            ),
    );
}
