use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use std::sync::Arc;

use crate::{
    handlers::{parse_object_id, portal_error_response},
    services::representation_service::RepresentationService,
    types::{
        requests::representation_request::ScheduleRepresentationRequest,
        responses::api_response::ApiResponse,
    },
    utils::locale_utils::{Messages, Namespace, get_lang},
};

pub async fn schedule_representation_handler(
    req: HttpRequest,
    representation_service: web::Data<Arc<RepresentationService>>,
    request: web::Json<ScheduleRepresentationRequest>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    match representation_service
        .schedule(request.into_inner(), &messages)
        .await
    {
        Ok(entry) => HttpResponse::Created().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "representation.schedule_success",
                "Representation scheduled.",
            ),
            entry,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn list_representations_handler(
    req: HttpRequest,
    representation_service: web::Data<Arc<RepresentationService>>,
    representative_id: web::Path<String>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let representative_id = match parse_object_id(&representative_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match representation_service
        .list_for_representative(&representative_id)
        .await
    {
        Ok(entries) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "representation.fetch_success",
                "Representation entries fetched successfully.",
            ),
            entries,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn representation_hours_handler(
    req: HttpRequest,
    representation_service: web::Data<Arc<RepresentationService>>,
    representative_id: web::Path<String>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let representative_id = match parse_object_id(&representative_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match representation_service
        .total_hours_for(&representative_id)
        .await
    {
        Ok(hours) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "representation.hours_success",
                "Representation hours calculated.",
            ),
            json!({ "total_hours": hours }),
        )),
        Err(err) => portal_error_response(&err),
    }
}
