use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::{
    handlers::{parse_object_id, portal_error_response},
    services::person_service::PersonService,
    types::{
        models::person::{
            notification_settings::NotificationSettings, person_status::PersonStatus,
        },
        requests::{profile_change_request::ProfileChangeRequest, review_request::Auditor},
        responses::api_response::ApiResponse,
    },
    utils::locale_utils::{Messages, Namespace, get_lang},
};

pub async fn get_all_persons_handler(
    req: HttpRequest,
    person_service: web::Data<Arc<PersonService>>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    match person_service.list_persons().await {
        Ok(persons) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Person,
                "fetch.all_success",
                "All persons fetched successfully.",
            ),
            persons,
        )),
        Err(err) => portal_error_response(&err),
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct EmailLookupQuery {
    pub email: String,
}

pub async fn find_person_by_email_handler(
    req: HttpRequest,
    person_service: web::Data<Arc<PersonService>>,
    query: web::Query<EmailLookupQuery>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    match person_service.find_by_email(&query.email, &messages).await {
        Ok(person) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Person,
                "fetch.success",
                "Person fetched successfully.",
            ),
            person,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn get_person_handler(
    req: HttpRequest,
    person_service: web::Data<Arc<PersonService>>,
    person_id: web::Path<String>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let person_id = match parse_object_id(&person_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match person_service.get_person(&person_id, &messages).await {
        Ok(person) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Person,
                "fetch.success",
                "Person fetched successfully.",
            ),
            person,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn submit_profile_change_handler(
    req: HttpRequest,
    person_service: web::Data<Arc<PersonService>>,
    person_id: web::Path<String>,
    change: web::Json<ProfileChangeRequest>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let person_id = match parse_object_id(&person_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match person_service
        .submit_profile_change(&person_id, change.into_inner(), &messages)
        .await
    {
        Ok(person) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Person,
                "profile.change_submitted",
                "Profile change submitted for review.",
            ),
            person,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn update_notification_settings_handler(
    req: HttpRequest,
    person_service: web::Data<Arc<PersonService>>,
    person_id: web::Path<String>,
    settings: web::Json<NotificationSettings>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let person_id = match parse_object_id(&person_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match person_service
        .update_notification_settings(&person_id, settings.into_inner(), &messages)
        .await
    {
        Ok(person) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Person,
                "settings.updated",
                "Notification settings updated.",
            ),
            person,
        )),
        Err(err) => portal_error_response(&err),
    }
}

async fn set_status(
    req: HttpRequest,
    person_service: web::Data<Arc<PersonService>>,
    person_id: web::Path<String>,
    auditor: web::Json<Auditor>,
    target: PersonStatus,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let person_id = match parse_object_id(&person_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match person_service
        .set_active_status(&person_id, target, &auditor.into_inner(), &messages)
        .await
    {
        Ok(person) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(Namespace::Person, "status.updated", "Status updated."),
            person,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn deactivate_person_handler(
    req: HttpRequest,
    person_service: web::Data<Arc<PersonService>>,
    person_id: web::Path<String>,
    auditor: web::Json<Auditor>,
) -> HttpResponse {
    set_status(req, person_service, person_id, auditor, PersonStatus::Inactive).await
}

pub async fn reactivate_person_handler(
    req: HttpRequest,
    person_service: web::Data<Arc<PersonService>>,
    person_id: web::Path<String>,
    auditor: web::Json<Auditor>,
) -> HttpResponse {
    set_status(req, person_service, person_id, auditor, PersonStatus::Active).await
}
