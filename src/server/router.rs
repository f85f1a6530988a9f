use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        dice::{CreateDiceDto, DiceDto, UpdateDiceDto},
        game::{CreateGameDto, GameDto, PopulatedGameDto},
        monster::{CreateMonsterDto, MonsterDto, PopulatedMonsterDto, UpdateMonsterDto},
        user::{CreateUserDto, UserDto},
    },
    server::{
        controller::{dice, game, index, monster, user},
        state::AppState,
    },
};

/// OpenAPI document served at `/swagger.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Dice API", description = "Users, monsters, dice and games for tabletop sessions"),
    paths(
        index::index,
        user::get_users,
        user::get_user_by_id,
        user::create_user,
        user::delete_user,
        user::add_user_monster,
        monster::get_monsters,
        monster::get_monster_by_id,
        monster::update_monster,
        monster::add_monster_dice,
        dice::get_dices,
        dice::update_dice,
        game::get_games,
        game::get_game_by_id,
        game::create_game,
        game::delete_game,
        game::add_game_monster,
        game::add_game_dice,
        game::remove_game_monster,
        game::remove_game_dice,
    ),
    components(schemas(
        ErrorDto,
        UserDto,
        CreateUserDto,
        MonsterDto,
        PopulatedMonsterDto,
        CreateMonsterDto,
        UpdateMonsterDto,
        DiceDto,
        CreateDiceDto,
        UpdateDiceDto,
        GameDto,
        PopulatedGameDto,
        CreateGameDto,
    )),
    tags(
        (name = "index", description = "Service status"),
        (name = "user", description = "Users and the monsters they own"),
        (name = "monster", description = "Monsters and their dice"),
        (name = "dice", description = "Dice"),
        (name = "game", description = "Games with their monsters and dice")
    )
)]
pub struct ApiDoc;

/// Builds the API routes.
///
/// Collection creation is also reachable with a trailing slash (`/users/`,
/// `/games/`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/users", get(user::get_users).post(user::create_user))
        .route("/users/", get(user::get_users).post(user::create_user))
        .route(
            "/users/{id}",
            get(user::get_user_by_id).delete(user::delete_user),
        )
        .route("/users/{id}/monsters", post(user::add_user_monster))
        .route("/monsters", get(monster::get_monsters))
        .route(
            "/monsters/{id}",
            get(monster::get_monster_by_id).put(monster::update_monster),
        )
        .route("/monsters/{id}/dices", post(monster::add_monster_dice))
        .route("/dices", get(dice::get_dices))
        .route("/dices/{id}", put(dice::update_dice))
        .route("/games", get(game::get_games).post(game::create_game))
        .route("/games/", get(game::get_games).post(game::create_game))
        .route(
            "/games/{id}",
            get(game::get_game_by_id).delete(game::delete_game),
        )
        .route("/games/{id}/monsters", post(game::add_game_monster))
        .route("/games/{id}/dices", post(game::add_game_dice))
        .route(
            "/games/{id}/monsters/{monster_id}",
            delete(game::remove_game_monster),
        )
        .route(
            "/games/{id}/dices/{dice_id}",
            delete(game::remove_game_dice),
        )
        .merge(SwaggerUi::new("/documentation").url("/swagger.json", ApiDoc::openapi()))
}

/// Builds the complete application with state, CORS and request tracing applied.
pub fn app(state: AppState) -> Router {
    router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
