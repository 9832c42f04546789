use crate::{
    config::DbConfig,
    data::student::{Student, StudentDraft},
    error::{MakeQuerySnafu, MigrateSnafu, MissingStudentSnafu, OpenDatabaseSnafu, RosterResult},
    store::StudentStore,
};
use async_trait::async_trait;
use snafu::{OptionExt, ResultExt, ensure};
use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

#[derive(Clone, Debug)]
pub struct PostgresStudentStore {
    pool: Pool<Postgres>,
}

impl PostgresStudentStore {
    pub async fn new(options: PgPoolOptions, db_config: &DbConfig) -> RosterResult<Self> {
        let pool = options
            .connect(&db_config.get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl StudentStore for PostgresStudentStore {
    async fn all(&self) -> RosterResult<Vec<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT id, first_name, last_name, email, major FROM public.students ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn insert(&self, draft: StudentDraft) -> RosterResult<Student> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO public.students (first_name, last_name, email, major) VALUES ($1, $2, $3, $4) RETURNING id, first_name, last_name, email, major",
        )
        .bind(draft.first_name)
        .bind(draft.last_name)
        .bind(draft.email)
        .bind(draft.major)
        .fetch_one(&self.pool)
        .await
        .context(MakeQuerySnafu)
    }

    async fn update(&self, id: i64, draft: StudentDraft) -> RosterResult<Student> {
        sqlx::query_as::<_, Student>(
            "UPDATE public.students SET first_name = $2, last_name = $3, email = $4, major = $5 WHERE id = $1 RETURNING id, first_name, last_name, email, major",
        )
        .bind(id)
        .bind(draft.first_name)
        .bind(draft.last_name)
        .bind(draft.email)
        .bind(draft.major)
        .fetch_optional(&self.pool)
        .await
        .context(MakeQuerySnafu)?
        .context(MissingStudentSnafu { id })
    }

    async fn remove(&self, id: i64) -> RosterResult<()> {
        let result = sqlx::query("DELETE FROM public.students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context(MakeQuerySnafu)?;

        ensure!(result.rows_affected() > 0, MissingStudentSnafu { id });
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
