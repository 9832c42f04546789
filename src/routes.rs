use crate::{config::RuntimeConfiguration, state::RosterState};
use axum::{
    Router,
    http::header::CONTENT_TYPE,
    routing::{get, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod index;
pub mod students;

fn cors_layer(config: &RuntimeConfiguration) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE]);

    match config.allowed_origin() {
        Some(origin) => layer.allow_origin(origin),
        None => layer,
    }
}

pub fn router(state: RosterState) -> Router {
    let api: Router<RosterState> = Router::new()
        .route(
            "/api/students",
            get(api::get_students).post(api::post_student),
        )
        .route(
            "/api/students/{id}",
            put(api::put_student).delete(api::delete_student),
        )
        .layer(cors_layer(state.config()));

    Router::new()
        .route("/", get(index::get_index_route))
        .route(
            "/ui/students",
            get(students::get_student_list).post(students::post_new_student),
        )
        .route(
            "/ui/students/{id}",
            put(students::put_student).delete(students::delete_student),
        )
        .route("/ui/students/{id}/edit", get(students::get_edit_form))
        .route(
            "/ui/students/{id}/confirm-delete",
            get(students::get_confirm_delete),
        )
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
