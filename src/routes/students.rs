use crate::{
    data::student::StudentDraft,
    roster::{NOT_IN_LIST, Notification},
    state::RosterState,
    ui::{
        form::{create_form, edit_modal},
        list::{confirm_delete, out_of_band_list, student_list},
        notification::out_of_band,
    },
};
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

pub async fn get_student_list(State(state): State<RosterState>) -> Response {
    let roster = state.roster();
    match roster.refresh().await {
        Ok(()) => student_list(&roster.students().await).into_response(),
        Err(notification) => {
            ([("HX-Reswap", "none")], out_of_band(&[notification])).into_response()
        }
    }
}

pub async fn post_new_student(
    State(state): State<RosterState>,
    Form(draft): Form<StudentDraft>,
) -> Markup {
    let roster = state.roster();
    let outcome = roster.submit_new(draft).await;
    let students = roster.students().await;

    html! {
        (create_form(&outcome.retained_draft.unwrap_or_default()))
        (out_of_band_list(&students))
        (out_of_band(&outcome.notifications))
    }
}

pub async fn get_edit_form(
    State(state): State<RosterState>,
    Path(id): Path<i64>,
) -> Response {
    match state.roster().student(id).await {
        Some(student) => edit_modal(id, &student.draft()).into_response(),
        None => {
            warn!(id, "Edit requested for a student missing from the list");
            (
                [("HX-Reswap", "none")],
                out_of_band(&[Notification::error(NOT_IN_LIST)]),
            )
                .into_response()
        }
    }
}

pub async fn put_student(
    State(state): State<RosterState>,
    Path(id): Path<i64>,
    Form(draft): Form<StudentDraft>,
) -> Markup {
    let roster = state.roster();
    let outcome = roster.submit_edit(id, draft).await;
    let students = roster.students().await;

    html! {
        @if let Some(draft) = &outcome.retained_draft {
            (edit_modal(id, draft))
        }
        (out_of_band_list(&students))
        (out_of_band(&outcome.notifications))
    }
}

pub async fn get_confirm_delete(Path(id): Path<i64>) -> Markup {
    confirm_delete(id)
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    confirmed: bool,
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Path(id): Path<i64>,
    Query(DeleteQuery { confirmed }): Query<DeleteQuery>,
) -> Markup {
    let roster = state.roster();
    let outcome = roster.delete(id, confirmed).await;
    let students = roster.students().await;

    html! {
        @if confirmed {
            (out_of_band_list(&students))
        }
        (out_of_band(&outcome.notifications))
    }
}
