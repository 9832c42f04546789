use axum::http::{StatusCode, header::InvalidHeaderValue};
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse IP port"))]
    ParsePort { source: ParseIntError },
    #[snafu(display("Unknown student store {:?}, expected `postgres` or `memory`", found))]
    UnknownStore { found: String },
    #[snafu(display("Unable to use {:?} as a CORS origin", origin))]
    InvalidOrigin {
        source: InvalidHeaderValue,
        origin: String,
    },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: i64 },
    #[snafu(display("{} cannot be blank", field))]
    BlankField { field: &'static str },
    #[snafu(display("{} must be between {} and {} characters, found {}", field, min, max, len))]
    FieldLength {
        field: &'static str,
        min: usize,
        max: usize,
        len: usize,
    },
    #[snafu(display("Please provide a valid email address"))]
    Email { source: email_address::Error },
}

impl RosterError {
    #[allow(clippy::match_same_arms)]
    pub fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::UNPROCESSABLE_ENTITY; //bad input

        match self {
            Self::OpenDatabase { .. } | Self::MigrateError { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::BadEnvVar { .. } | Self::ParsePort { .. } => ISE,
            Self::UnknownStore { .. } | Self::InvalidOrigin { .. } => ISE,
            Self::MissingStudent { .. } => NF,
            Self::BlankField { .. } | Self::FieldLength { .. } | Self::Email { .. } => BI,
        }
    }
}
