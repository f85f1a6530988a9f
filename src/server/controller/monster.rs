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
        monster::{MonsterDto, PopulatedMonsterDto, UpdateMonsterDto},
    },
    server::{
        error::AppError,
        extract::{ValidatedJson, ValidatedPath},
        model::{dice::CreateDiceParam, monster::UpdateMonsterParam},
        service::monster::MonsterService,
        state::AppState,
    },
};

pub static MONSTER_TAG: &str = "monster";

#[utoipa::path(
    get,
    path = "/monsters",
    tag = MONSTER_TAG,
    responses(
        (status = 200, description = "List of monsters", body = Vec<MonsterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monsters(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let monsters = MonsterService::new(&state.db).get_all().await?;

    let dto: Vec<MonsterDto> = monsters.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    get,
    path = "/monsters/{id}",
    tag = MONSTER_TAG,
    params(
        ("id" = i32, Path, description = "Monster ID")
    ),
    responses(
        (status = 200, description = "Matching monsters with dice resolved (empty when not found)", body = Vec<PopulatedMonsterDto>),
        (status = 400, description = "Malformed monster ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_monster_by_id(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let monsters = MonsterService::new(&state.db).get_by_id(id).await?;

    let dto: Vec<PopulatedMonsterDto> = monsters.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Replace the mutable fields of a monster.
///
/// An absent or empty `pictureLink` keeps the stored link.
#[utoipa::path(
    put,
    path = "/monsters/{id}",
    tag = MONSTER_TAG,
    params(
        ("id" = i32, Path, description = "Monster ID")
    ),
    request_body = UpdateMonsterDto,
    responses(
        (status = 200, description = "Updated monster", body = MonsterDto),
        (status = 400, description = "Invalid monster data", body = ErrorDto),
        (status = 404, description = "Monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_monster(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateMonsterDto>,
) -> Result<impl IntoResponse, AppError> {
    let monster = MonsterService::new(&state.db)
        .update(id, UpdateMonsterParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(monster.into_dto())))
}

#[utoipa::path(
    post,
    path = "/monsters/{id}/dices",
    tag = MONSTER_TAG,
    params(
        ("id" = i32, Path, description = "Monster ID")
    ),
    request_body = CreateDiceDto,
    responses(
        (status = 200, description = "Created dice", body = DiceDto),
        (status = 400, description = "Invalid dice data", body = ErrorDto),
        (status = 404, description = "Monster not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_monster_dice(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<CreateDiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let dice = MonsterService::new(&state.db)
        .add_dice(id, CreateDiceParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(dice.into_dto())))
}
