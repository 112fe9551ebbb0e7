use dioxus::prelude::*;

use crate::server::view::layout::Layout;

#[component]
pub fn LoginPage(
    #[props(into)] username: String,
    #[props(!optional)] notice: Option<String>,
) -> Element {
    rsx! {
        Layout { page_title: "Login", principal: None, notice,
            h1 { "Login" }
            form { class: "stacked", method: "post", action: "/login",
                label { r#for: "username", "Username" }
                input { id: "username", r#type: "text", name: "username", value: "{username}" }
                label { r#for: "password", "Password" }
                input { id: "password", r#type: "password", name: "password" }
                p { button { class: "btn", r#type: "submit", "Login" } }
            }
            p { a { class: "btn", href: "/auth/google", "Login with Google" } }
        }
    }
}
