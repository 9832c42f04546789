use crate::error::{BlankFieldSnafu, EmailSnafu, FieldLengthSnafu, RosterResult};
use email_address::{EmailAddress, Options};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
}

impl Student {
    pub fn from_draft(id: i64, draft: StudentDraft) -> Self {
        let StudentDraft {
            first_name,
            last_name,
            email,
            major,
        } = draft;

        Self {
            id,
            first_name,
            last_name,
            email,
            major,
        }
    }

    pub fn draft(&self) -> StudentDraft {
        StudentDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            major: self.major.clone(),
        }
    }
}

/// A student's editable fields, without the server-assigned id.
///
/// This is both the create/update payload and the local state of the form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub major: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    FirstName,
    LastName,
    Email,
    Major,
}

impl StudentField {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Major];

    /// Name on the wire and in form submissions.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Major => "major",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Major => "Major",
        }
    }

    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }
}

impl StudentDraft {
    pub fn value(&self, field: StudentField) -> &str {
        match field {
            StudentField::FirstName => &self.first_name,
            StudentField::LastName => &self.last_name,
            StudentField::Email => &self.email,
            StudentField::Major => &self.major,
        }
    }

    pub fn missing_fields(&self) -> Vec<StudentField> {
        StudentField::ALL
            .into_iter()
            .filter(|field| self.value(*field).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Checks applied by the backend before anything is stored.
    pub fn validate(&self) -> RosterResult<()> {
        if let Some(field) = self.missing_fields().first() {
            return BlankFieldSnafu {
                field: field.label(),
            }
            .fail();
        }

        for field in [StudentField::FirstName, StudentField::LastName] {
            let len = self.value(field).chars().count();
            ensure!(
                (NAME_MIN..=NAME_MAX).contains(&len),
                FieldLengthSnafu {
                    field: field.label(),
                    min: NAME_MIN,
                    max: NAME_MAX,
                    len,
                }
            );
        }

        EmailAddress::parse_with_options(&self.email, Options::default().without_display_text())
            .context(EmailSnafu)?;

        Ok(())
    }
}
