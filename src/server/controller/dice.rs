use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        dice::{DiceDto, UpdateDiceDto},
    },
    server::{
        error::AppError,
        extract::{ValidatedJson, ValidatedPath},
        model::dice::UpdateDiceParam,
        service::dice::DiceService,
        state::AppState,
    },
};

pub static DICE_TAG: &str = "dice";

#[utoipa::path(
    get,
    path = "/dices",
    tag = DICE_TAG,
    responses(
        (status = 200, description = "List of dice", body = Vec<DiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dices(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dices = DiceService::new(&state.db).get_all().await?;

    let dto: Vec<DiceDto> = dices.into_iter().map(|dice| dice.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Replace the mutable fields of a dice.
///
/// An absent `objective` keeps the stored objective.
#[utoipa::path(
    put,
    path = "/dices/{id}",
    tag = DICE_TAG,
    params(
        ("id" = i32, Path, description = "Dice ID")
    ),
    request_body = UpdateDiceDto,
    responses(
        (status = 200, description = "Updated dice", body = DiceDto),
        (status = 400, description = "Invalid dice data", body = ErrorDto),
        (status = 404, description = "Dice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dice(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateDiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let dice = DiceService::new(&state.db)
        .update(id, UpdateDiceParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(dice.into_dto())))
}
