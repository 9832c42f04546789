use crate::{
    client::{ClientError, StudentApi, UnexpectedStatusSnafu},
    data::student::{Student, StudentDraft},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetAll,
    Create(StudentDraft),
    Update(i64, StudentDraft),
    Remove(i64),
}

/// In-memory [`StudentApi`] that records every call and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingApi {
    calls: Mutex<Vec<Call>>,
    students: Mutex<Vec<Student>>,
    fail_fetch: AtomicBool,
    fail_mutations: AtomicBool,
}

impl RecordingApi {
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Mutex::new(students),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn fail_fetch(&self, fail: bool) {
        self.fail_fetch.store(fail, Ordering::SeqCst);
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn failure() -> ClientError {
        UnexpectedStatusSnafu {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            endpoint: "http://test/api/students",
        }
        .build()
    }

    fn check(&self, flag: &AtomicBool) -> Result<(), ClientError> {
        if flag.load(Ordering::SeqCst) {
            Err(Self::failure())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl StudentApi for RecordingApi {
    async fn get_all(&self) -> Result<Vec<Student>, ClientError> {
        self.record(Call::GetAll);
        self.check(&self.fail_fetch)?;
        Ok(self.students.lock().unwrap().clone())
    }

    async fn create(&self, draft: &StudentDraft) -> Result<Student, ClientError> {
        self.record(Call::Create(draft.clone()));
        self.check(&self.fail_mutations)?;

        let mut students = self.students.lock().unwrap();
        let id = students.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        let student = Student::from_draft(id, draft.clone());
        students.push(student.clone());
        Ok(student)
    }

    async fn update(&self, id: i64, draft: &StudentDraft) -> Result<Student, ClientError> {
        self.record(Call::Update(id, draft.clone()));
        self.check(&self.fail_mutations)?;

        let mut students = self.students.lock().unwrap();
        let student = Student::from_draft(id, draft.clone());
        match students.iter_mut().find(|s| s.id == id) {
            Some(existing) => *existing = student.clone(),
            None => {
                return Err(UnexpectedStatusSnafu {
                    status: StatusCode::NOT_FOUND,
                    endpoint: format!("http://test/api/students/{id}"),
                }
                .build());
            }
        }
        Ok(student)
    }

    async fn remove(&self, id: i64) -> Result<(), ClientError> {
        self.record(Call::Remove(id));
        self.check(&self.fail_mutations)?;

        self.students.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }
}
