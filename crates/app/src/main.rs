use migration::{Migrator, MigratorTrait};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = match settings::Settings::new() {
        Ok(settings) => settings,
        Err(err) => {
            init_tracing(settings::DEFAULT_LEVEL);
            tracing::error!("failed to load settings: {err}");
            return Err(err.into());
        }
    };

    init_tracing(&settings.app.level);

    let db = match connect_database(&settings.server.database_url()).await {
        Ok(db) => db,
        Err(err) => {
            tracing::error!("failed to initialize database: {err}");
            return Err(err);
        }
    };

    let engine = engine::Engine::builder().database(db).build().await?;

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(engine, listener).await?;
    Ok(())
}

fn filter_directives(level: &str) -> String {
    format!("holonet={level},server={level},engine={level},tower_http={level}")
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter_directives(level))
        .init();
}

async fn connect_database(
    url: &str,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    tracing::info!("Connecting to database...");
    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
