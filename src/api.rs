//! REST handlers over the shared [`League`]. The binary mounts them with [`configure`].

use crate::league::League;
use crate::models::{LeagueError, Limits, NewPlayer, PlayerId, StatsPatch, UserId};
use actix_web::{
    delete, get, post, put,
    web::{self, Data, Json, Path},
    HttpResponse, Responder,
};
use serde::{Deserialize, Serialize};

pub type AppState = Data<League>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

/// Path segment: roster owner (e.g. /api/rosters/{user_id})
#[derive(Deserialize)]
struct RosterPath {
    user_id: UserId,
}

/// Path segments: roster owner and player (e.g. /api/rosters/{user_id}/players/{player_id})
#[derive(Deserialize)]
struct RosterPlayerPath {
    user_id: UserId,
    player_id: PlayerId,
}

/// Status code for a league error, with `{"error": "..."}` as body.
pub fn error_response(e: &LeagueError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        _ if e.is_not_found() => HttpResponse::NotFound().json(body),
        LeagueError::LockPoisoned | LeagueError::Seed(_) => {
            log::error!("{}", e);
            HttpResponse::InternalServerError().json(body)
        }
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn respond<T: Serialize>(result: Result<T, LeagueError>) -> HttpResponse {
    match result {
        Ok(value) => HttpResponse::Ok().json(value),
        Err(e) => error_response(&e),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "fantasy-cricket-web",
    })
}

/// Budget, roster size and role quotas, for building a team-selection preview.
#[get("/api/limits")]
async fn api_limits() -> impl Responder {
    HttpResponse::Ok().json(Limits::current())
}

#[get("/api/players")]
async fn api_list_players(state: AppState) -> HttpResponse {
    respond(state.players())
}

/// Total runs and wickets plus the leading run scorer and wicket taker.
#[get("/api/players/summary")]
async fn api_player_summary(state: AppState) -> HttpResponse {
    respond(state.summary())
}

#[get("/api/players/{id}")]
async fn api_get_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    respond(state.player(path.id))
}

/// Create a player from manual entry; counters not given start at zero.
#[post("/api/players")]
async fn api_create_player(state: AppState, body: Json<NewPlayer>) -> HttpResponse {
    match state.add_player(&body) {
        Ok(player) => HttpResponse::Created().json(player),
        Err(e) => error_response(&e),
    }
}

/// Update some or all counters of a player; points and value are recomputed.
#[put("/api/players/{id}/stats")]
async fn api_update_player_stats(state: AppState, path: Path<PlayerPath>, body: Json<StatsPatch>) -> HttpResponse {
    respond(state.update_player_stats(path.id, &body))
}

/// Delete a player (also removes it from every roster).
#[delete("/api/players/{id}")]
async fn api_delete_player(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    respond(state.delete_player(path.id))
}

#[get("/api/rosters/{user_id}")]
async fn api_get_roster(state: AppState, path: Path<RosterPath>) -> HttpResponse {
    respond(state.roster_view(path.user_id))
}

#[post("/api/rosters/{user_id}/players/{player_id}")]
async fn api_add_member(state: AppState, path: Path<RosterPlayerPath>) -> HttpResponse {
    respond(state.add_member(path.user_id, path.player_id))
}

#[delete("/api/rosters/{user_id}/players/{player_id}")]
async fn api_remove_member(state: AppState, path: Path<RosterPlayerPath>) -> HttpResponse {
    respond(state.remove_member(path.user_id, path.player_id))
}

/// Complete rosters only, highest total points first.
#[get("/api/leaderboard")]
async fn api_leaderboard(state: AppState) -> HttpResponse {
    respond(state.leaderboard())
}

/// Register every API route. `/api/players/summary` must come before `/api/players/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_limits)
        .service(api_list_players)
        .service(api_player_summary)
        .service(api_get_player)
        .service(api_create_player)
        .service(api_update_player_stats)
        .service(api_delete_player)
        .service(api_get_roster)
        .service(api_add_member)
        .service(api_remove_member)
        .service(api_leaderboard);
}
