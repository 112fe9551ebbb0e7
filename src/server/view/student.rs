//! Student list and add/edit form pages.

use dioxus::prelude::*;

use crate::{
    model::student::StudentDto,
    server::{model::student::StudentForm, view::layout::Layout},
};

#[component]
pub fn StudentListPage(
    students: Vec<StudentDto>,
    #[props(into)] keyword: String,
    #[props(!optional)] principal: Option<String>,
    #[props(!optional)] notice: Option<String>,
) -> Element {
    let logged_in = principal.is_some();

    let add_link = logged_in.then(|| {
        rsx! {
            a { class: "btn", href: "/add", "Add student" }
        }
    });

    let results = if students.is_empty() {
        rsx! {
            p { "No students found." }
        }
    } else {
        let actions_header = logged_in.then(|| rsx! { th {} });
        let rows = students.into_iter().map(|student| {
            let id = student.id;
            rsx! {
                StudentRow { key: "{id}", editable: logged_in, student }
            }
        });

        rsx! {
            table {
                thead {
                    tr {
                        th { "Student ID" }
                        th { "Name" }
                        th { "Age" }
                        th { "Major" }
                        th { "GPA" }
                        {actions_header}
                    }
                }
                tbody { {rows} }
            }
        }
    };

    rsx! {
        Layout { page_title: "Students", principal, notice,
            h1 { "Students" }
            form { method: "get", action: "/students",
                input {
                    r#type: "text",
                    name: "name",
                    placeholder: "Student ID, name or major",
                    value: "{keyword}",
                }
                button { class: "btn", r#type: "submit", "Search" }
                " "
                {add_link}
            }
            {results}
        }
    }
}

#[component]
fn StudentRow(student: StudentDto, editable: bool) -> Element {
    let age = student.age.map(|age| age.to_string()).unwrap_or_default();
    let major = student.major.clone().unwrap_or_default();
    let gpa = student.gpa.map(|gpa| format!("{gpa:.2}")).unwrap_or_default();
    let id = student.id;

    let actions = editable.then(|| {
        rsx! {
            td {
                a { class: "btn", href: "/edit/{id}", "Edit" }
                " "
                a { class: "btn btn-danger", href: "/delete/{id}", "Delete" }
            }
        }
    });

    rsx! {
        tr {
            td { "{student.student_id}" }
            td { "{student.name}" }
            td { "{age}" }
            td { "{major}" }
            td { "{gpa}" }
            {actions}
        }
    }
}

/// Add or edit form; `action` is the URL the form posts back to
#[component]
pub fn StudentFormPage(
    #[props(into)] heading: String,
    #[props(into)] action: String,
    form: StudentForm,
    #[props(!optional)] principal: Option<String>,
    #[props(!optional)] notice: Option<String>,
) -> Element {
    rsx! {
        Layout { page_title: heading.clone(), principal, notice,
            h1 { "{heading}" }
            form { class: "stacked", method: "post", action: "{action}",
                label { r#for: "studentID", "Student ID" }
                input {
                    id: "studentID",
                    r#type: "text",
                    name: "studentID",
                    maxlength: "8",
                    value: "{form.student_id}",
                }
                label { r#for: "name", "Name" }
                input { id: "name", r#type: "text", name: "name", value: "{form.name}" }
                label { r#for: "age", "Age" }
                input { id: "age", r#type: "text", name: "age", value: "{form.age}" }
                label { r#for: "major", "Major" }
                input { id: "major", r#type: "text", name: "major", value: "{form.major}" }
                label { r#for: "gpa", "GPA" }
                input { id: "gpa", r#type: "text", name: "gpa", value: "{form.gpa}" }
                p {
                    button { class: "btn", r#type: "submit", "Save" }
                    " "
                    a { href: "/students", "Cancel" }
                }
            }
        }
    }
}
