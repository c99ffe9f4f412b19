use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page--home",
            h1 { "Shelf" }
            p { "A small reading list, kept on the web." }
        }
    }
}
