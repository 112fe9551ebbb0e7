use entity::{prelude::Student, student};
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::student::UpdateStudentDto,
    server::{
        model::{db::StudentModel, student::StudentInput},
        service::student::search::StudentFilter,
    },
};

/// Escape character used in LIKE patterns
const LIKE_ESCAPE: char = '\\';

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Runs a search filter against the store, ordered by store key
    ///
    /// [`StudentFilter::Nothing`] never reaches the store.
    pub async fn find(&self, filter: StudentFilter) -> Result<Vec<StudentModel>, DbErr> {
        let query = match filter {
            StudentFilter::Nothing => return Ok(Vec::new()),
            StudentFilter::All => Student::find(),
            StudentFilter::ByStudentId(student_id) => {
                Student::find().filter(student::Column::StudentId.eq(student_id))
            }
            StudentFilter::NameOrMajor(term) => Student::find().filter(name_or_major(&term)),
        };

        query
            .order_by_asc(student::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, id: i32) -> Result<Option<StudentModel>, DbErr> {
        Student::find_by_id(id).one(self.db).await
    }

    /// Finds a record holding `student_id`, ignoring the record with store key `exclude`
    pub async fn find_by_student_id(
        &self,
        student_id: &str,
        exclude: Option<i32>,
    ) -> Result<Option<StudentModel>, DbErr> {
        let mut query = Student::find().filter(student::Column::StudentId.eq(student_id));

        if let Some(id) = exclude {
            query = query.filter(student::Column::Id.ne(id));
        }

        query.one(self.db).await
    }

    pub async fn create(&self, input: StudentInput) -> Result<StudentModel, DbErr> {
        let student = student::ActiveModel {
            student_id: ActiveValue::Set(input.student_id),
            name: ActiveValue::Set(input.name),
            age: ActiveValue::Set(input.age),
            major: ActiveValue::Set(input.major),
            gpa: ActiveValue::Set(input.gpa),
            ..Default::default()
        };

        student.insert(self.db).await
    }

    /// Overwrites every field of an existing record
    ///
    /// Returns `Ok(None)` when no record has the store key.
    pub async fn update(
        &self,
        id: i32,
        input: StudentInput,
    ) -> Result<Option<StudentModel>, DbErr> {
        let Some(student) = Student::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut student_am = student.into_active_model();
        student_am.student_id = ActiveValue::Set(input.student_id);
        student_am.name = ActiveValue::Set(input.name);
        student_am.age = ActiveValue::Set(input.age);
        student_am.major = ActiveValue::Set(input.major);
        student_am.gpa = ActiveValue::Set(input.gpa);

        Ok(Some(student_am.update(self.db).await?))
    }

    /// Writes only the fields present in `patch`; a present `None` clears an optional field
    ///
    /// Returns `Ok(None)` when no record has the store key.
    pub async fn patch(
        &self,
        id: i32,
        patch: UpdateStudentDto,
    ) -> Result<Option<StudentModel>, DbErr> {
        let Some(student) = Student::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut student_am = student.clone().into_active_model();
        if let Some(student_id) = patch.student_id {
            student_am.student_id = ActiveValue::Set(student_id);
        }
        if let Some(name) = patch.name {
            student_am.name = ActiveValue::Set(name);
        }
        if let Some(age) = patch.age {
            student_am.age = ActiveValue::Set(age);
        }
        if let Some(major) = patch.major {
            student_am.major = ActiveValue::Set(major);
        }
        if let Some(gpa) = patch.gpa {
            student_am.gpa = ActiveValue::Set(gpa);
        }

        if !student_am.is_changed() {
            return Ok(Some(student));
        }

        Ok(Some(student_am.update(self.db).await?))
    }

    /// Deletes a record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        Student::delete_by_id(id).exec(self.db).await
    }
}

/// Case-insensitive literal substring match on name or major
fn name_or_major(term: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));

    Condition::any()
        .add(
            Expr::expr(Func::lower(Expr::col(student::Column::Name)))
                .like(LikeExpr::new(pattern.clone()).escape(LIKE_ESCAPE)),
        )
        .add(
            Expr::expr(Func::lower(Expr::col(student::Column::Major)))
                .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
        )
}

/// Escapes the LIKE wildcards so the term only ever matches itself
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());

    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }

    escaped
}
