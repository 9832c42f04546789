use crate::{
    data::student::Student,
    maud_conveniences::render_table,
    ui::form::modal,
};
use maud::{Markup, html};

const ROW_STAGGER_MS: usize = 50;

fn row(index: usize, student: &Student) -> Markup {
    let id = student.id;
    html! {
        tr id={"student_row_" (id)} class="student-row border-b border-gray-600 hover:bg-gray-700" style={"animation-delay: " (index * ROW_STAGGER_MS) "ms"} {
            td class="whitespace-nowrap py-3 px-6" {(student.first_name)}
            td class="whitespace-nowrap py-3 px-6" {(student.last_name)}
            td class="whitespace-nowrap py-3 px-6" {
                a href={"mailto:" (student.email)} class="text-cyan-400" {(student.email)}
            }
            td class="whitespace-nowrap py-3 px-6" {(student.major)}
            td class="whitespace-nowrap py-3 px-6 flex justify-center space-x-4" {
                button hx-get={"/ui/students/" (id) "/edit"} hx-target="#modal" class="text-blue-400 hover:text-blue-200" { "Edit" }
                button hx-get={"/ui/students/" (id) "/confirm-delete"} hx-target="#modal" class="text-red-400 hover:text-red-200" { "Delete" }
            }
        }
    }
}

fn contents(students: &[Student]) -> Markup {
    html! {
        @if students.is_empty() {
            p class="text-gray-400 text-center py-4" { "No students found. Add one above!" }
        } @else {
            (render_table(
                ["First Name", "Last Name", "Email", "Major", "Actions"],
                students.iter().enumerate().map(|(i, student)| row(i, student)),
            ))
        }
    }
}

/// The list is stateless: it renders whatever collection it is handed.
pub fn student_list(students: &[Student]) -> Markup {
    html! {
        div id="student_list" {
            (contents(students))
        }
    }
}

pub fn out_of_band_list(students: &[Student]) -> Markup {
    html! {
        div id="student_list" hx-swap-oob="true" {
            (contents(students))
        }
    }
}

pub fn confirm_delete(id: i64) -> Markup {
    let exit_row = format!("document.getElementById('student_row_{id}')?.classList.add('row-exit')");
    modal(html! {
        p class="text-lg mb-6" { "Are you sure you want to delete this student?" }
        div class="flex justify-end space-x-4" {
            button hx-delete={"/ui/students/" (id)} hx-vals=r#"{"confirmed": false}"# hx-target="#modal" class="py-2 px-4 bg-gray-600 rounded-lg hover:bg-gray-500" { "Cancel" }
            button hx-delete={"/ui/students/" (id)} hx-vals=r#"{"confirmed": true}"# hx-target="#modal" onclick=(exit_row) class="py-2 px-4 bg-red-600 rounded-lg hover:bg-red-700 font-bold" { "Delete" }
        }
    })
}
