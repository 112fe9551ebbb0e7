//! Student input as submitted through the web forms.

use serde::{Deserialize, Serialize};

use crate::{
    model::student::{CreateStudentDto, StudentDto},
    server::error::student::StudentError,
};

/// Raw values of the add/edit form
///
/// Browsers submit every field as text, so nothing is parsed here. The same struct is used
/// to re-populate the form when a submission is rejected.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StudentForm {
    #[serde(rename = "studentID")]
    pub student_id: String,
    pub name: String,
    pub age: String,
    pub major: String,
    pub gpa: String,
}

impl From<&StudentDto> for StudentForm {
    fn from(student: &StudentDto) -> Self {
        Self {
            student_id: student.student_id.clone(),
            name: student.name.clone(),
            age: student.age.map(|age| age.to_string()).unwrap_or_default(),
            major: student.major.clone().unwrap_or_default(),
            gpa: student.gpa.map(|gpa| gpa.to_string()).unwrap_or_default(),
        }
    }
}

/// Student fields ready to be written to the store
///
/// The student ID is carried as submitted; its format and uniqueness are checked by the
/// student service right before the write.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentInput {
    pub student_id: String,
    pub name: String,
    pub age: Option<i32>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
}

impl TryFrom<StudentForm> for StudentInput {
    type Error = StudentError;

    fn try_from(form: StudentForm) -> Result<Self, Self::Error> {
        let name = form.name.trim();
        if name.is_empty() {
            return Err(StudentError::MissingName);
        }

        let age = match non_empty(&form.age) {
            Some(age) => Some(age.parse::<i32>().map_err(|_| StudentError::InvalidField {
                field: "Age",
                value: age.to_string(),
            })?),
            None => None,
        };

        let gpa = match non_empty(&form.gpa) {
            Some(gpa) => Some(
                gpa.parse::<f64>()
                    .ok()
                    .filter(|gpa| gpa.is_finite())
                    .ok_or_else(|| StudentError::InvalidField {
                        field: "GPA",
                        value: gpa.to_string(),
                    })?,
            ),
            None => None,
        };

        Ok(Self {
            student_id: form.student_id.trim().to_string(),
            name: name.to_string(),
            age,
            major: non_empty(&form.major).map(str::to_string),
            gpa,
        })
    }
}

impl From<CreateStudentDto> for StudentInput {
    fn from(dto: CreateStudentDto) -> Self {
        Self {
            student_id: dto.student_id,
            name: dto.name,
            age: dto.age,
            major: dto.major,
            gpa: dto.gpa,
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}
