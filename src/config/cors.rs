use actix_cors::Cors;
use actix_web::http::header;

pub fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|origin, _req_head| {
            origin
                .to_str()
                .map(|o| o.ends_with("localhost:3000") || o.ends_with(".zahnportal.at"))
                .unwrap_or(false)
        })
        .allowed_methods(vec!["GET", "POST", "PUT", "PATCH", "DELETE"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCEPT_LANGUAGE,
        ])
        .supports_credentials()
        .max_age(3600)
}
