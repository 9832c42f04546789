use crate::{
    data::student::{StudentDraft, StudentField},
    maud_conveniences::{form_element, subtitle},
};
use maud::{Markup, html};

fn fields(draft: &StudentDraft) -> Markup {
    html! {
        @for field in StudentField::ALL {
            (form_element(field.name(), field.label(), field.input_type(), draft.value(field)))
        }
    }
}

/// Inline form for adding a student. It replaces itself with the handler's response.
pub fn create_form(draft: &StudentDraft) -> Markup {
    html! {
        form id="student_form" hx-post="/ui/students" hx-target="this" hx-swap="outerHTML" class="grid grid-cols-1 sm:grid-cols-2 gap-4" {
            (fields(draft))
            button type="submit" class="sm:col-span-2 bg-cyan-500 hover:bg-cyan-600 text-white font-bold py-3 px-6 rounded-lg transition-colors" {
                "Add Student"
            }
        }
    }
}

pub fn modal(markup: Markup) -> Markup {
    html! {
        div class="fixed inset-0 bg-black/50 flex justify-center items-center z-40" {
            div class="modal-card bg-gray-800 rounded-lg shadow-2xl p-8 w-full max-w-md" {
                (markup)
            }
        }
    }
}

const CLOSE_MODAL: &str = "document.getElementById('modal').innerHTML = ''";

pub fn edit_modal(id: i64, draft: &StudentDraft) -> Markup {
    modal(html! {
        div class="flex justify-between items-center mb-6" {
            (subtitle("Edit Student"))
            button type="button" onclick=(CLOSE_MODAL) class="text-gray-400 hover:text-white" { "✕" }
        }
        form hx-put={"/ui/students/" (id)} hx-target="#modal" class="space-y-4" {
            (fields(draft))
            div class="flex justify-end space-x-4 pt-4" {
                button type="button" onclick=(CLOSE_MODAL) class="py-2 px-4 bg-gray-600 rounded-lg hover:bg-gray-500" { "Cancel" }
                button type="submit" class="py-2 px-4 bg-cyan-500 rounded-lg hover:bg-cyan-600 font-bold" { "Save" }
            }
        }
    })
}
