pub mod modules;
pub mod shared;
pub use modules::{
    articles, assets, auth, awards, certifications, contact, education, email, experience,
    floating_message, projects, skills, testimonials,
};
pub mod health;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::articles::adapter::incoming::ArticlesState;
use crate::articles::adapter::outgoing::repository_postgres::ArticleRepositoryPostgres;
use crate::articles::application::service::ArticleService;
use crate::assets::adapter::outgoing::gcs_asset_store::GcsAssetStore;
use crate::assets::application::ports::AssetStore;
use crate::auth::adapter::incoming::AuthState;
use crate::auth::adapter::outgoing::bcrypt_verifier::BcryptVerifier;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::{AdminCredentials, TokenProvider};
use crate::auth::application::service::LoginService;
use crate::awards::adapter::incoming::AwardsState;
use crate::awards::adapter::outgoing::repository_postgres::AwardRepositoryPostgres;
use crate::awards::application::service::AwardService;
use crate::certifications::adapter::incoming::CertificationsState;
use crate::certifications::adapter::outgoing::repository_postgres::CertificationRepositoryPostgres;
use crate::certifications::application::service::CertificationService;
use crate::contact::adapter::incoming::ContactState;
use crate::contact::adapter::outgoing::repository_postgres::ContactMessageRepositoryPostgres;
use crate::contact::application::service::ContactMessageService;
use crate::education::adapter::incoming::EducationState;
use crate::education::adapter::outgoing::repository_postgres::EducationRepositoryPostgres;
use crate::education::application::service::EducationService;
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::service::ContactEmailService;
use crate::experience::adapter::incoming::ExperienceState;
use crate::experience::adapter::outgoing::repository_postgres::ExperienceRepositoryPostgres;
use crate::experience::application::service::ExperienceService;
use crate::floating_message::adapter::incoming::FloatingMessageState;
use crate::floating_message::adapter::outgoing::repository_postgres::FloatingMessageRepositoryPostgres;
use crate::floating_message::application::service::FloatingMessageService;
use crate::projects::adapter::incoming::ProjectsState;
use crate::projects::adapter::outgoing::repository_postgres::ProjectRepositoryPostgres;
use crate::projects::application::service::ProjectService;
use crate::skills::adapter::incoming::SkillsState;
use crate::skills::adapter::outgoing::repository_postgres::SkillRepositoryPostgres;
use crate::skills::application::service::SkillService;
use crate::testimonials::adapter::incoming::TestimonialsState;
use crate::testimonials::adapter::outgoing::repository_postgres::TestimonialRepositoryPostgres;
use crate::testimonials::application::service::TestimonialService;

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let server_url = format!("{host}:{port}");

    let admin_email = env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL not set");
    let admin_password_hash = env::var("ADMIN_PASSWORD_HASH").expect("ADMIN_PASSWORD_HASH not set");

    // SMTP setup
    let from_email = env::var("EMAIL_FROM").expect("EMAIL_FROM not set");
    let smtp_sender = if env_name == "test" {
        // Local Mailpit
        let smtp_host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let smtp_port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .expect("Invalid SMTP_PORT");

        SmtpEmailSender::new_local(&smtp_host, smtp_port, &from_email)
    } else {
        let smtp_server = env::var("SMTP_SERVER").expect("SMTP_SERVER not set");
        let smtp_user = env::var("SMTP_USERNAME").expect("SMTP_USERNAME not set");
        let smtp_pass = env::var("SMTP_PASSWORD").expect("SMTP_PASSWORD not set");

        SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
            .expect("Failed to build SMTP transport")
    };

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db = Arc::new(conn);

    let assets: Arc<dyn AssetStore> = Arc::new(GcsAssetStore::from_env());

    // Auth
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider: Arc<dyn TokenProvider> = Arc::new(jwt_service);
    let auth_state = AuthState {
        login: Arc::new(LoginService::new(
            AdminCredentials {
                email: admin_email.clone(),
                password_hash: admin_password_hash,
            },
            Arc::new(BcryptVerifier),
            Arc::clone(&token_provider),
        )),
    };

    // Content services, one per module
    let projects = Arc::new(ProjectService::new(ProjectRepositoryPostgres::new(
        Arc::clone(&db),
    )));
    let projects_state = ProjectsState {
        list: projects.clone(),
        get: projects.clone(),
        create: projects.clone(),
        update: projects.clone(),
        delete: projects.clone(),
        toggle_show_on_home: projects,
        assets: Arc::clone(&assets),
    };

    let skills = Arc::new(SkillService::new(SkillRepositoryPostgres::new(Arc::clone(
        &db,
    ))));
    let skills_state = SkillsState {
        catalog: skills.clone(),
        create_category: skills.clone(),
        update_category: skills.clone(),
        delete_category: skills.clone(),
        create_skill: skills.clone(),
        update_skill: skills.clone(),
        delete_skill: skills,
        assets: Arc::clone(&assets),
    };

    let experience = Arc::new(ExperienceService::new(ExperienceRepositoryPostgres::new(
        Arc::clone(&db),
    )));
    let experience_state = ExperienceState {
        list: experience.clone(),
        get: experience.clone(),
        create: experience.clone(),
        update: experience.clone(),
        delete: experience,
        assets: Arc::clone(&assets),
    };

    let education = Arc::new(EducationService::new(EducationRepositoryPostgres::new(
        Arc::clone(&db),
    )));
    let education_state = EducationState {
        list: education.clone(),
        get: education.clone(),
        create: education.clone(),
        update: education.clone(),
        delete: education,
        assets: Arc::clone(&assets),
    };

    let certifications = Arc::new(CertificationService::new(
        CertificationRepositoryPostgres::new(Arc::clone(&db)),
    ));
    let certifications_state = CertificationsState {
        list: certifications.clone(),
        get: certifications.clone(),
        create: certifications.clone(),
        update: certifications.clone(),
        delete: certifications.clone(),
        toggle_pinned: certifications,
        assets: Arc::clone(&assets),
    };

    let awards = Arc::new(AwardService::new(AwardRepositoryPostgres::new(Arc::clone(
        &db,
    ))));
    let awards_state = AwardsState {
        list: awards.clone(),
        get: awards.clone(),
        create: awards.clone(),
        update: awards.clone(),
        delete: awards.clone(),
        toggle_featured: awards,
        assets: Arc::clone(&assets),
    };

    let articles = Arc::new(ArticleService::new(ArticleRepositoryPostgres::new(
        Arc::clone(&db),
    )));
    let articles_state = ArticlesState {
        list_published: articles.clone(),
        list_all: articles.clone(),
        get: articles.clone(),
        create: articles.clone(),
        update: articles.clone(),
        delete: articles.clone(),
        toggle_status: articles,
        assets: Arc::clone(&assets),
    };

    let testimonials = Arc::new(TestimonialService::new(TestimonialRepositoryPostgres::new(
        Arc::clone(&db),
    )));
    let testimonials_state = TestimonialsState {
        submit: testimonials.clone(),
        list_approved: testimonials.clone(),
        list_all: testimonials.clone(),
        delete: testimonials.clone(),
        toggle_approval: testimonials,
        assets: Arc::clone(&assets),
    };

    let notifier = Arc::new(ContactEmailService::new(smtp_sender, admin_email));
    let contact = Arc::new(ContactMessageService::new(
        ContactMessageRepositoryPostgres::new(Arc::clone(&db)),
        notifier,
    ));
    let contact_state = ContactState {
        submit: contact.clone(),
        list: contact.clone(),
        delete: contact.clone(),
        toggle_read: contact,
    };

    let floating = Arc::new(FloatingMessageService::new(
        FloatingMessageRepositoryPostgres::new(Arc::clone(&db)),
    ));
    let floating_state = FloatingMessageState {
        banner: floating.clone(),
        list: floating.clone(),
        create: floating.clone(),
        update: floating.clone(),
        delete: floating.clone(),
        toggle_active: floating,
    };

    info!("Server run on: {}", server_url);

    let db_for_server = Arc::clone(&db);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(auth_state.clone()))
            .app_data(web::Data::new(projects_state.clone()))
            .app_data(web::Data::new(skills_state.clone()))
            .app_data(web::Data::new(experience_state.clone()))
            .app_data(web::Data::new(education_state.clone()))
            .app_data(web::Data::new(certifications_state.clone()))
            .app_data(web::Data::new(awards_state.clone()))
            .app_data(web::Data::new(articles_state.clone()))
            .app_data(web::Data::new(testimonials_state.clone()))
            .app_data(web::Data::new(contact_state.clone()))
            .app_data(web::Data::new(floating_state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    cfg.service(crate::auth::adapter::incoming::login_handler);
    crate::projects::adapter::incoming::init_routes(cfg);
    crate::skills::adapter::incoming::init_routes(cfg);
    crate::experience::adapter::incoming::init_routes(cfg);
    crate::education::adapter::incoming::init_routes(cfg);
    crate::certifications::adapter::incoming::init_routes(cfg);
    crate::awards::adapter::incoming::init_routes(cfg);
    crate::articles::adapter::incoming::init_routes(cfg);
    crate::testimonials::adapter::incoming::init_routes(cfg);
    crate::contact::adapter::incoming::init_routes(cfg);
    crate::floating_message::adapter::incoming::init_routes(cfg);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
