use crate::{
    data::student::{Student, StudentDraft},
    error::{MissingStudentSnafu, RosterResult},
    store::StudentStore,
};
use async_trait::async_trait;
use snafu::OptionExt;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug)]
struct Inner {
    students: BTreeMap<i64, Student>,
    next_id: i64,
}

#[derive(Debug)]
pub struct MemoryStudentStore {
    inner: RwLock<Inner>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                students: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn all(&self) -> RosterResult<Vec<Student>> {
        Ok(self.inner.read().await.students.values().cloned().collect())
    }

    async fn insert(&self, draft: StudentDraft) -> RosterResult<Student> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let student = Student::from_draft(id, draft);
        inner.students.insert(id, student.clone());
        Ok(student)
    }

    async fn update(&self, id: i64, draft: StudentDraft) -> RosterResult<Student> {
        let mut inner = self.inner.write().await;
        let student = inner
            .students
            .get_mut(&id)
            .context(MissingStudentSnafu { id })?;

        *student = Student::from_draft(id, draft);
        Ok(student.clone())
    }

    async fn remove(&self, id: i64) -> RosterResult<()> {
        self.inner
            .write()
            .await
            .students
            .remove(&id)
            .map(|_| ())
            .context(MissingStudentSnafu { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::student::tests::ada, error::RosterError};

    #[tokio::test]
    async fn ids_are_assigned_in_order_and_never_reused() {
        let store = MemoryStudentStore::new();
        let first = store.insert(ada()).await.unwrap();
        let second = store.insert(ada()).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        store.remove(second.id).await.unwrap();
        let third = store.insert(ada()).await.unwrap();
        assert_eq!(third.id, 3);

        let ids: Vec<_> = store.all().await.unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn update_replaces_fields_but_keeps_id() {
        let store = MemoryStudentStore::new();
        let created = store.insert(ada()).await.unwrap();

        let changed = StudentDraft {
            major: "Computing".to_string(),
            ..ada()
        };
        let updated = store.update(created.id, changed.clone()).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.draft(), changed);
        assert_eq!(store.all().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn unknown_ids_are_missing() {
        let store = MemoryStudentStore::new();
        assert!(matches!(
            store.update(4, ada()).await,
            Err(RosterError::MissingStudent { id: 4 })
        ));
        assert!(matches!(
            store.remove(4).await,
            Err(RosterError::MissingStudent { id: 4 })
        ));
    }
}
