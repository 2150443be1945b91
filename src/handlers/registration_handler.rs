use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use std::sync::Arc;

use crate::{
    handlers::{parse_draft_id, portal_error_response},
    services::registration_service::RegistrationService,
    types::{
        requests::registration_request::SaveStepRequest, responses::api_response::ApiResponse,
    },
    utils::locale_utils::{Messages, Namespace, get_lang},
};

pub async fn start_registration_handler(
    req: HttpRequest,
    registration_service: web::Data<Arc<RegistrationService>>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let draft_id = registration_service.start();
    HttpResponse::Created().json(ApiResponse::success(
        messages.get_str(
            Namespace::Person,
            "registration.started",
            "Registration started.",
        ),
        json!({ "draft_id": draft_id }),
    ))
}

pub async fn save_step_handler(
    req: HttpRequest,
    registration_service: web::Data<Arc<RegistrationService>>,
    draft_id: web::Path<String>,
    step: web::Json<SaveStepRequest>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let draft_id = match parse_draft_id(&draft_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match registration_service.save_step(&draft_id, step.into_inner(), &messages) {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::message_only(messages.get_str(
            Namespace::Person,
            "registration.step_saved",
            "Registration step saved.",
        ))),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn complete_registration_handler(
    req: HttpRequest,
    registration_service: web::Data<Arc<RegistrationService>>,
    draft_id: web::Path<String>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let draft_id = match parse_draft_id(&draft_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match registration_service.complete(&draft_id, &messages).await {
        Ok(person) => HttpResponse::Created().json(ApiResponse::success(
            messages.get_str(
                Namespace::Person,
                "registration.completed",
                "Registration submitted for review.",
            ),
            person,
        )),
        Err(err) => portal_error_response(&err),
    }
}
