use actix_cors::Cors;
use actix_web::{http::header, App, HttpServer};
use anyhow::Context;
use freelanceflow::config::Config;
use freelanceflow::middleware::RequestId;
use freelanceflow::modules;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("freelanceflow={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.app.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting FreelanceFlow financial engine");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let bind_address = config.server.bind_address();
    let allowed_origin = config.cors.allowed_origin.clone();
    let tax = config.tax.clone();

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        let tax = tax.clone();
        App::new()
            .wrap(cors)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(move |cfg| modules::configure(cfg, tax))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("Server terminated with an error")?;
    Ok(())
}
