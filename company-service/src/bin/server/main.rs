use std::sync::Arc;

use anyhow::Context;
use auth::Authenticator;
use company_service::config::BootstrapAdminConfig;
use company_service::config::Config;
use company_service::domain::access::token::TokenCodec;
use company_service::domain::department::service::DepartmentService;
use company_service::domain::employee::service::EmployeeService;
use company_service::domain::identity::models::BootstrapAdminCommand;
use company_service::domain::identity::models::Password;
use company_service::domain::identity::models::Username;
use company_service::domain::identity::ports::IdentityServicePort;
use company_service::domain::identity::service::IdentityService;
use company_service::domain::project::service::ProjectService;
use company_service::domain::values::EmailAddress;
use company_service::inbound::http::router::create_router;
use company_service::inbound::http::router::AppState;
use company_service::outbound::notifications::LogRegistrationNotifier;
use company_service::outbound::repositories::department::PostgresDepartmentRepository;
use company_service::outbound::repositories::employee::PostgresEmployeeRepository;
use company_service::outbound::repositories::project::PostgresProjectRepository;
use company_service::outbound::repositories::user::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "company_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "company-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        bootstrap_admin = config.bootstrap_admin.is_some(),
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes()));
    let token_codec = Arc::new(TokenCodec::new(
        Arc::clone(&authenticator),
        chrono::Duration::hours(config.jwt.expiration_hours),
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let department_repository = Arc::new(PostgresDepartmentRepository::new(pg_pool.clone()));
    let employee_repository = Arc::new(PostgresEmployeeRepository::new(pg_pool.clone()));
    let project_repository = Arc::new(PostgresProjectRepository::new(pg_pool));
    let notifier = Arc::new(LogRegistrationNotifier::new(
        config.notifications.from_address.clone(),
    ));

    let identity_service = Arc::new(IdentityService::new(
        user_repository,
        notifier,
        Arc::clone(&authenticator),
    ));

    if let Some(admin) = &config.bootstrap_admin {
        identity_service
            .bootstrap_admin(bootstrap_command(admin)?)
            .await
            .context("Failed to bootstrap administrator account")?;
    }

    let state = AppState {
        identity_service,
        department_service: Arc::new(DepartmentService::new(department_repository)),
        employee_service: Arc::new(EmployeeService::new(Arc::clone(&employee_repository))),
        project_service: Arc::new(ProjectService::new(project_repository, employee_repository)),
        token_codec,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");
    Ok(())
}

fn bootstrap_command(admin: &BootstrapAdminConfig) -> Result<BootstrapAdminCommand, anyhow::Error> {
    Ok(BootstrapAdminCommand {
        username: Username::new(admin.username.clone()).context("bootstrap_admin.username")?,
        email: EmailAddress::new(admin.email.clone()).context("bootstrap_admin.email")?,
        password: Password::new(admin.password.clone()).context("bootstrap_admin.password")?,
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
