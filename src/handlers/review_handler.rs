use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    handlers::{parse_object_id, portal_error_response},
    services::review_service::ReviewService,
    types::{requests::review_request::ReviewRequest, responses::api_response::ApiResponse},
    utils::locale_utils::{Messages, Namespace, get_lang},
};

pub async fn review_person_handler(
    req: HttpRequest,
    review_service: web::Data<Arc<ReviewService>>,
    person_id: web::Path<String>,
    review: web::Json<ReviewRequest>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);
    let data = review.into_inner();

    let person_id = match parse_object_id(&person_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match review_service
        .review(
            &person_id,
            data.decision,
            data.rejection_reason.as_deref(),
            data.expected_version,
            &data.auditor,
            &messages,
        )
        .await
    {
        Ok(outcome) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Person,
                "review.success",
                "Review decision recorded.",
            ),
            outcome,
        )),
        Err(err) => portal_error_response(&err),
    }
}
