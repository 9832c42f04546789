use crate::{
    data::student::{Student, StudentDraft},
    error::RosterResult,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod memory;
pub mod postgres;

/// Where the backend keeps students.
#[async_trait]
pub trait StudentStore: Debug + Send + Sync {
    /// Every student, ordered by id.
    async fn all(&self) -> RosterResult<Vec<Student>>;
    async fn insert(&self, draft: StudentDraft) -> RosterResult<Student>;
    async fn update(&self, id: i64, draft: StudentDraft) -> RosterResult<Student>;
    async fn remove(&self, id: i64) -> RosterResult<()>;

    async fn close(&self) {}
}
