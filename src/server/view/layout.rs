use dioxus::prelude::*;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f5f5; color: #222; }
.navbar { display: flex; justify-content: space-between; align-items: center; padding: 0.75rem 1.5rem; background: #2c3e50; color: #fff; }
.navbar a { color: #fff; margin-left: 1rem; text-decoration: none; }
main { max-width: 960px; margin: 1.5rem auto; padding: 0 1rem; }
.notice { padding: 0.75rem 1rem; margin-bottom: 1rem; background: #fff3cd; border: 1px solid #ffe08a; border-radius: 4px; }
table { width: 100%; border-collapse: collapse; background: #fff; }
th, td { padding: 0.5rem; border-bottom: 1px solid #ddd; text-align: left; }
form.stacked label { display: block; margin-top: 0.75rem; }
form.stacked input { width: 100%; padding: 0.4rem; box-sizing: border-box; }
.btn { display: inline-block; padding: 0.4rem 0.9rem; border: 0; border-radius: 4px; background: #2c3e50; color: #fff; text-decoration: none; cursor: pointer; }
.btn-danger { background: #c0392b; }
"#;

/// Page header with the logged in principal, if any
#[component]
pub fn Navbar(#[props(!optional)] principal: Option<String>) -> Element {
    let account = match principal {
        Some(principal) => rsx! {
            span { "Logged in as {principal}" }
            a { href: "/logout", "Logout" }
        },
        None => rsx! {
            a { href: "/login", "Login" }
        },
    };

    rsx! {
        nav { class: "navbar",
            a { href: "/students", strong { "Student Records" } }
            div { {account} }
        }
    }
}

/// Shared document shell for every page
#[component]
pub fn Layout(
    #[props(into)] page_title: String,
    #[props(!optional)] principal: Option<String>,
    #[props(!optional)] notice: Option<String>,
    children: Element,
) -> Element {
    let notice = notice.map(|notice| {
        rsx! {
            div { class: "notice", "{notice}" }
        }
    });

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{page_title}" }
            style { dangerous_inner_html: STYLE }
        }
        body {
            Navbar { principal }
            main {
                {notice}
                {children}
            }
        }
    }
}
