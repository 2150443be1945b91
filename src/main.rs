use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use dotenv::dotenv;
use log::info;

use kammerportal_backend::{
    config::database::{connect_to_database, create_unique_indexes},
    constants::{REGISTRATION_DRAFT_TTL_MINUTES, SERVER_ADDR},
    repositories::{
        audit_log_repository::AuditLogRepository,
        document_template_repository::DocumentTemplateRepository, mail_repository::MailRepository,
        notification_repository::NotificationRepository, outbox_repository::OutboxRepository,
        person_repository::PersonRepository,
        representation_repository::RepresentationRepository, training_repository::TrainingRepository,
    },
    routes::{
        person_routes::configure_person_routes, portal_routes::configure_portal_routes,
        registration_routes::configure_registration_routes,
    },
    services::{
        audit_log_service::AuditLogService, draft_store::RegistrationDraftStore,
        notification_service::NotificationService, outbox_service::OutboxService,
        person_service::PersonService, registration_service::RegistrationService,
        representation_service::RepresentationService, review_service::ReviewService,
        template_service::TemplateService, training_service::TrainingService,
    },
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let client = connect_to_database()
        .await
        .context("Failed to connect to MongoDB")?;
    create_unique_indexes(&client)
        .await
        .context("Failed to create unique indexes")?;

    let person_repository = Arc::new(PersonRepository::new(&client).await?);
    let audit_log_repository = Arc::new(AuditLogRepository::new(&client).await?);
    let notification_repository = Arc::new(NotificationRepository::new(&client).await?);
    let mail_repository = Arc::new(MailRepository::new(&client).await?);
    let outbox_repository = Arc::new(OutboxRepository::new(&client).await?);
    let template_repository = Arc::new(DocumentTemplateRepository::new(&client).await?);
    let training_repository = Arc::new(TrainingRepository::new(&client).await?);
    let representation_repository = Arc::new(RepresentationRepository::new(&client).await?);

    let drafts = Arc::new(RegistrationDraftStore::new(Duration::from_secs(
        REGISTRATION_DRAFT_TTL_MINUTES * 60,
    )));

    let outbox_service = Arc::new(OutboxService::new(
        outbox_repository,
        audit_log_repository.clone(),
        notification_repository.clone(),
        mail_repository,
    ));
    let review_service = Arc::new(ReviewService::new(
        person_repository.clone(),
        outbox_service.clone(),
    ));
    let registration_service = Arc::new(RegistrationService::new(
        person_repository.clone(),
        audit_log_repository.clone(),
        drafts,
    ));
    let person_service = Arc::new(PersonService::new(
        person_repository.clone(),
        audit_log_repository.clone(),
    ));
    let notification_service = Arc::new(NotificationService::new(notification_repository));
    let audit_log_service = Arc::new(AuditLogService::new(audit_log_repository));
    let template_service = Arc::new(TemplateService::new(template_repository));
    let training_service = Arc::new(TrainingService::new(
        training_repository,
        person_repository.clone(),
    ));
    let representation_service = Arc::new(RepresentationService::new(
        representation_repository,
        person_repository,
    ));

    let registration_service_data = web::Data::new(registration_service);
    let person_service_data = web::Data::new(person_service);
    let review_service_data = web::Data::new(review_service);
    let notification_service_data = web::Data::new(notification_service);
    let audit_log_service_data = web::Data::new(audit_log_service);
    let template_service_data = web::Data::new(template_service);
    let training_service_data = web::Data::new(training_service);
    let representation_service_data = web::Data::new(representation_service);
    let outbox_service_data = web::Data::new(outbox_service);

    let server_addr = SERVER_ADDR.clone();
    info!("Starting member portal backend on {server_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| {
                configure_registration_routes(cfg, registration_service_data.clone());
                configure_person_routes(
                    cfg,
                    person_service_data.clone(),
                    review_service_data.clone(),
                    audit_log_service_data.clone(),
                    training_service_data.clone(),
                    representation_service_data.clone(),
                );
                configure_portal_routes(
                    cfg,
                    notification_service_data.clone(),
                    template_service_data.clone(),
                    representation_service_data.clone(),
                    audit_log_service_data.clone(),
                    outbox_service_data.clone(),
                );
            })
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run()
    .await?;

    Ok(())
}
