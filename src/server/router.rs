use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        claim::{self, CLAIM_TAG},
        guest::{self, GUEST_TAG},
        item::{self, ITEM_TAG},
        system::{self, SYSTEM_TAG},
        user::{self, USER_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Gift Registry & RSVP API"),
    paths(
        system::root,
        system::health,
        user::get_users,
        user::get_user,
        user::get_user_guests,
        user::create_user,
        user::update_user,
        user::delete_user,
        guest::get_guests,
        guest::get_guests_by_user,
        guest::get_guest,
        guest::get_guest_items,
        guest::create_guest,
        guest::update_guest,
        guest::delete_guest,
        item::get_items,
        item::get_claimed_items,
        item::get_unclaimed_items,
        item::get_items_by_guest,
        item::get_item,
        item::get_item_guests,
        item::create_item,
        item::update_item,
        item::claim_item,
        item::unclaim_item,
        item::delete_item,
        claim::get_claims,
        claim::get_claims_by_guest,
        claim::get_claims_by_item,
        claim::create_claim,
        claim::update_claim,
        claim::delete_claim,
        claim::delete_claims_by_guest,
        claim::delete_claims_by_item,
        admin::check_database,
        admin::get_user_schema,
        admin::get_table_schema,
        admin::get_migrations,
        admin::run_migrations,
    ),
    tags(
        (name = SYSTEM_TAG, description = "Service information"),
        (name = USER_TAG, description = "Registry users"),
        (name = GUEST_TAG, description = "Guests and RSVPs"),
        (name = ITEM_TAG, description = "Registry items"),
        (name = CLAIM_TAG, description = "Guest claims on items"),
        (name = ADMIN_TAG, description = "Database administration"),
    )
)]
pub struct ApiDoc;

/// Builds the application router with every resource, the API docs and the 404 fallback.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .nest("/api/users", user_routes())
        .nest("/api/guests", guest_routes())
        .nest("/api/items", item_routes())
        .nest("/api/claims", claim_routes())
        .nest("/api/admin", admin_routes())
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .fallback(system::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(user::get_users).post(user::create_user))
        .route(
            "/{email}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/{email}/guests", get(user::get_user_guests))
}

fn guest_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(guest::get_guests).post(guest::create_guest))
        .route("/user/{user_email}", get(guest::get_guests_by_user))
        .route(
            "/{name}/{number}",
            get(guest::get_guest)
                .put(guest::update_guest)
                .delete(guest::delete_guest),
        )
        .route("/{name}/{number}/items", get(guest::get_guest_items))
}

fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(item::get_items).post(item::create_item))
        .route("/claimed", get(item::get_claimed_items))
        .route("/unclaimed", get(item::get_unclaimed_items))
        .route(
            "/guest/{guest_name}/{guest_number}",
            get(item::get_items_by_guest),
        )
        .route(
            "/{item_name}",
            get(item::get_item)
                .put(item::update_item)
                .delete(item::delete_item),
        )
        .route("/{item_name}/guests", get(item::get_item_guests))
        .route("/{item_name}/claim", post(item::claim_item))
        .route("/{item_name}/unclaim", post(item::unclaim_item))
}

fn claim_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(claim::get_claims).post(claim::create_claim))
        .route(
            "/guest/{guest_name}/{guest_number}",
            get(claim::get_claims_by_guest).delete(claim::delete_claims_by_guest),
        )
        .route(
            "/item/{item_name}",
            get(claim::get_claims_by_item).delete(claim::delete_claims_by_item),
        )
        .route(
            "/{guest_name}/{guest_number}/{item_name}",
            put(claim::update_claim).delete(claim::delete_claim),
        )
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/check-database", get(admin::check_database))
        .route("/user-schema", get(admin::get_user_schema))
        .route("/schema/{table}", get(admin::get_table_schema))
        .route(
            "/migrations",
            get(admin::get_migrations).post(admin::run_migrations),
        )
}
