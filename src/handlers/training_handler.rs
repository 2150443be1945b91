use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;
use std::sync::Arc;

use crate::{
    handlers::{parse_object_id, portal_error_response},
    services::training_service::TrainingService,
    types::{
        requests::training_request::RecordTrainingRequest, responses::api_response::ApiResponse,
    },
    utils::locale_utils::{Messages, Namespace, get_lang},
};

pub async fn record_training_handler(
    req: HttpRequest,
    training_service: web::Data<Arc<TrainingService>>,
    person_id: web::Path<String>,
    request: web::Json<RecordTrainingRequest>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let person_id = match parse_object_id(&person_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match training_service
        .record(&person_id, request.into_inner(), &messages)
        .await
    {
        Ok(entry) => HttpResponse::Created().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "training.record_success",
                "Training entry recorded.",
            ),
            entry,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn list_training_handler(
    req: HttpRequest,
    training_service: web::Data<Arc<TrainingService>>,
    person_id: web::Path<String>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let person_id = match parse_object_id(&person_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match training_service.list_for_person(&person_id).await {
        Ok(entries) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "training.fetch_success",
                "Training entries fetched successfully.",
            ),
            entries,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn training_points_handler(
    req: HttpRequest,
    training_service: web::Data<Arc<TrainingService>>,
    path: web::Path<(String, i32)>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);
    let (person_id, year) = path.into_inner();

    let person_id = match parse_object_id(&person_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match training_service.points_for_year(&person_id, year).await {
        Ok(points) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "training.points_success",
                "Training points calculated.",
            ),
            json!({ "year": year, "points": points }),
        )),
        Err(err) => portal_error_response(&err),
    }
}
