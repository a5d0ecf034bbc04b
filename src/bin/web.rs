//! Single binary web server: JSON REST API over an in-memory league.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT.
//! PLAYERS_CSV seeds the player table at startup; BUDGET_POLICY is `enforced` (default) or `advisory`.

use actix_web::{get, web::Data, App, HttpResponse, HttpServer};
use fantasy_cricket_web::{api, load_players_csv, AppConfig, League};
use std::fs::File;

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

fn seed_league(config: &AppConfig) -> std::io::Result<League> {
    let Some(path) = &config.players_csv else {
        log::info!("No PLAYERS_CSV set; starting with an empty player table");
        return Ok(League::new(config.budget_policy));
    };
    let file = File::open(path)?;
    let players = load_players_csv(file).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    log::info!("Seeded {} players from {}", players.len(), path.display());
    Ok(League::with_players(players, config.budget_policy))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = AppConfig::from_env();
    let state = Data::new(seed_league(&config)?);
    log::info!(
        "Starting server at http://{}:{} (budget {:?})",
        config.host,
        config.port,
        config.budget_policy
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(favicon)
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
