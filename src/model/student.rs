use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A student record as exposed by the JSON API and rendered pages
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    /// Store-assigned key of the record
    #[serde(rename = "_id")]
    pub id: i32,
    /// 8 digit student identifier
    #[serde(rename = "studentID")]
    pub student_id: String,
    pub name: String,
    pub age: Option<i32>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
}

impl From<entity::student::Model> for StudentDto {
    fn from(model: entity::student::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            name: model.name,
            age: model.age,
            major: model.major,
            gpa: model.gpa,
        }
    }
}

/// Request body for creating a student through the JSON API
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    #[serde(rename = "studentID")]
    pub student_id: String,
    pub name: String,
    pub age: Option<i32>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
}

/// Request body for updating a student through the JSON API
///
/// Only the fields present in the body are written. An explicit `null` clears one of the
/// optional fields, which is why those are `Option<Option<_>>`: the outer layer is presence.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    #[serde(rename = "studentID")]
    pub student_id: Option<String>,
    pub name: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<i32>)]
    pub age: Option<Option<i32>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<String>)]
    pub major: Option<Option<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    #[schema(value_type = Option<f64>)]
    pub gpa: Option<Option<f64>>,
}
