use crate::{
    data::student::StudentDraft,
    maud_conveniences::{card, subtitle, title},
    state::RosterState,
    ui::{form::create_form, list::student_list, notification::toasts},
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<RosterState>) -> Markup {
    let roster = state.roster();
    let notifications: Vec<_> = roster.refresh().await.err().into_iter().collect();
    let students = roster.students().await;

    state.render(html! {
        (toasts(&notifications))
        div class="container mx-auto p-8" {
            header {
                (title("Student Roster"))
            }
            main class="max-w-4xl mx-auto" {
                (card(html! {
                    (subtitle("Add New Student"))
                    (create_form(&StudentDraft::default()))
                }))
                (card(html! {
                    div class="flex justify-between items-center" {
                        (subtitle("Student List"))
                        button hx-get="/ui/students" hx-target="#student_list" hx-swap="outerHTML" class="bg-gray-700 hover:bg-gray-600 font-bold py-2 px-4 rounded-lg" {
                            "Refresh"
                        }
                    }
                    (student_list(&students))
                }))
            }
        }
        div id="modal" {}
    })
}
