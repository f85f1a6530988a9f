use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        dice::{CreateDiceDto, DiceDto},
        game::{CreateGameDto, GameDto, PopulatedGameDto},
        monster::{CreateMonsterDto, MonsterDto},
    },
    server::{
        error::AppError,
        extract::{ValidatedJson, ValidatedPath},
        model::{dice::CreateDiceParam, game::CreateGameParam, monster::CreateMonsterParam},
        service::game::GameService,
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Get all games with monsters and dice as identifiers.
#[utoipa::path(
    get,
    path = "/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "List of games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db).get_all().await?;

    let dto: Vec<GameDto> = games.into_iter().map(|game| game.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Get a game by ID with monsters and dice resolved.
///
/// Answers a list holding the game, or an empty list when no game matches.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Matching games (empty when not found)", body = Vec<PopulatedGameDto>),
        (status = 400, description = "Malformed game ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let games = GameService::new(&state.db).get_by_id(id).await?;

    let dto: Vec<PopulatedGameDto> = games.into_iter().map(|game| game.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/games",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 200, description = "Created game", body = GameDto),
        (status = 400, description = "Invalid game data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_game(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateGameDto>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db)
        .create(CreateGameParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a game by ID.
///
/// Referenced monsters and dice are kept in their own collections.
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    responses(
        (status = 200, description = "Confirmation message", body = String),
        (status = 400, description = "Malformed game ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    GameService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, "Game deleted"))
}

#[utoipa::path(
    post,
    path = "/games/{id}/monsters",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    request_body = CreateMonsterDto,
    responses(
        (status = 200, description = "Created monster", body = MonsterDto),
        (status = 400, description = "Invalid monster data", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_game_monster(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<CreateMonsterDto>,
) -> Result<impl IntoResponse, AppError> {
    let monster = GameService::new(&state.db)
        .add_monster(id, CreateMonsterParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(monster.into_dto())))
}

#[utoipa::path(
    post,
    path = "/games/{id}/dices",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID")
    ),
    request_body = CreateDiceDto,
    responses(
        (status = 200, description = "Created dice", body = DiceDto),
        (status = 400, description = "Invalid dice data", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_game_dice(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<CreateDiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let dice = GameService::new(&state.db)
        .add_dice(id, CreateDiceParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(dice.into_dto())))
}

/// Detach a monster from a game.
///
/// The monster record itself is kept.
#[utoipa::path(
    delete,
    path = "/games/{id}/monsters/{monster_id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID"),
        ("monster_id" = i32, Path, description = "Monster ID")
    ),
    responses(
        (status = 200, description = "Game after the change, resolved", body = PopulatedGameDto),
        (status = 400, description = "Malformed game or child ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_game_monster(
    State(state): State<AppState>,
    ValidatedPath((id, monster_id)): ValidatedPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db)
        .remove_monster(id, monster_id)
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Detach a dice from a game.
///
/// The dice record itself is kept.
#[utoipa::path(
    delete,
    path = "/games/{id}/dices/{dice_id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game ID"),
        ("dice_id" = i32, Path, description = "Dice ID")
    ),
    responses(
        (status = 200, description = "Game after the change, resolved", body = PopulatedGameDto),
        (status = 400, description = "Malformed game or child ID", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_game_dice(
    State(state): State<AppState>,
    ValidatedPath((id, dice_id)): ValidatedPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let game = GameService::new(&state.db).remove_dice(id, dice_id).await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}
