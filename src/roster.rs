use crate::{
    client::StudentApi,
    data::student::{Student, StudentDraft},
};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const FETCH_FAILED: &str = "Failed to fetch students from the server.";
pub const INCOMPLETE_FORM: &str = "Please fill out all fields.";
pub const ADDED: &str = "Student added successfully!";
pub const ADD_FAILED: &str = "Failed to add student.";
pub const UPDATED: &str = "Student updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update student.";
pub const DELETED: &str = "Student deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete student.";
pub const NOT_IN_LIST: &str = "That student is no longer in the list.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: &'static str,
}

impl Notification {
    pub const fn success(message: &'static str) -> Self {
        Self {
            kind: NotificationKind::Success,
            message,
        }
    }

    pub const fn error(message: &'static str) -> Self {
        Self {
            kind: NotificationKind::Error,
            message,
        }
    }
}

/// What the page should show after a user action.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notifications: Vec<Notification>,
    /// The draft to put back into the form. `None` clears the form (or closes the editor).
    pub retained_draft: Option<StudentDraft>,
}

impl Outcome {
    fn retain(draft: StudentDraft, notification: Notification) -> Self {
        Self {
            notifications: vec![notification],
            retained_draft: Some(draft),
        }
    }
}

/// Process-local UI state: the last collection fetched from the API.
///
/// Nothing here is patched locally. Every mutation goes to the API and is
/// followed by a full re-fetch.
#[derive(Debug)]
pub struct Roster {
    api: Arc<dyn StudentApi>,
    students: RwLock<Vec<Student>>,
}

impl Roster {
    pub fn new(api: Arc<dyn StudentApi>) -> Self {
        Self {
            api,
            students: RwLock::new(Vec::new()),
        }
    }

    pub async fn students(&self) -> Vec<Student> {
        self.students.read().await.clone()
    }

    pub async fn student(&self, id: i64) -> Option<Student> {
        self.students
            .read()
            .await
            .iter()
            .find(|student| student.id == id)
            .cloned()
    }

    /// On failure the stored collection is left as it was.
    pub async fn refresh(&self) -> Result<(), Notification> {
        match self.api.get_all().await {
            Ok(students) => {
                debug!(count = students.len(), "Fetched students");
                *self.students.write().await = students;
                Ok(())
            }
            Err(e) => {
                error!(?e, "Error fetching students");
                Err(Notification::error(FETCH_FAILED))
            }
        }
    }

    async fn refresh_after(&self, mut notifications: Vec<Notification>) -> Outcome {
        if let Err(notification) = self.refresh().await {
            notifications.push(notification);
        }
        Outcome {
            notifications,
            retained_draft: None,
        }
    }

    pub async fn submit_new(&self, draft: StudentDraft) -> Outcome {
        if !draft.is_complete() {
            return Outcome::retain(draft, Notification::error(INCOMPLETE_FORM));
        }

        match self.api.create(&draft).await {
            Ok(student) => {
                info!(id = student.id, "Added student");
                self.refresh_after(vec![Notification::success(ADDED)]).await
            }
            Err(e) => {
                error!(?e, "Error adding student");
                Outcome::retain(draft, Notification::error(ADD_FAILED))
            }
        }
    }

    pub async fn submit_edit(&self, id: i64, draft: StudentDraft) -> Outcome {
        if !draft.is_complete() {
            return Outcome::retain(draft, Notification::error(INCOMPLETE_FORM));
        }

        match self.api.update(id, &draft).await {
            Ok(_) => {
                info!(id, "Updated student");
                self.refresh_after(vec![Notification::success(UPDATED)]).await
            }
            Err(e) => {
                error!(?e, id, "Error updating student");
                Outcome::retain(draft, Notification::error(UPDATE_FAILED))
            }
        }
    }

    pub async fn delete(&self, id: i64, confirmed: bool) -> Outcome {
        if !confirmed {
            return Outcome::default();
        }

        match self.api.remove(id).await {
            Ok(()) => {
                info!(id, "Deleted student");
                self.refresh_after(vec![Notification::success(DELETED)]).await
            }
            Err(e) => {
                error!(?e, id, "Error deleting student");
                Outcome {
                    notifications: vec![Notification::error(DELETE_FAILED)],
                    retained_draft: None,
                }
            }
        }
    }
}
