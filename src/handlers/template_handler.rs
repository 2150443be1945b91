use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    handlers::{parse_object_id, portal_error_response},
    services::template_service::TemplateService,
    types::{
        requests::template_request::UploadTemplateRequest, responses::api_response::ApiResponse,
    },
    utils::locale_utils::{Messages, Namespace, get_lang},
};

#[derive(Debug, Deserialize)]
pub struct TemplateFilter {
    pub category: Option<String>,
    pub locale: Option<String>,
}

pub async fn upload_template_handler(
    req: HttpRequest,
    template_service: web::Data<Arc<TemplateService>>,
    request: web::Json<UploadTemplateRequest>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    match template_service
        .upload_metadata(request.into_inner(), &messages)
        .await
    {
        Ok(template) => HttpResponse::Created().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "templates.upload_success",
                "Template registered successfully.",
            ),
            template,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn list_templates_handler(
    req: HttpRequest,
    template_service: web::Data<Arc<TemplateService>>,
    filter: web::Query<TemplateFilter>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    match template_service
        .list(filter.category.as_deref(), filter.locale.as_deref())
        .await
    {
        Ok(templates) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "templates.fetch_success",
                "Templates fetched successfully.",
            ),
            templates,
        )),
        Err(err) => portal_error_response(&err),
    }
}

pub async fn get_template_handler(
    req: HttpRequest,
    template_service: web::Data<Arc<TemplateService>>,
    template_id: web::Path<String>,
) -> HttpResponse {
    let lang = get_lang(&req);
    let messages = Messages::new(lang);

    let template_id = match parse_object_id(&template_id, &messages) {
        Ok(id) => id,
        Err(err) => return portal_error_response(&err),
    };

    match template_service.get(&template_id, &messages).await {
        Ok(template) => HttpResponse::Ok().json(ApiResponse::success(
            messages.get_str(
                Namespace::Portal,
                "templates.fetch_success",
                "Templates fetched successfully.",
            ),
            template,
        )),
        Err(err) => portal_error_response(&err),
    }
}
