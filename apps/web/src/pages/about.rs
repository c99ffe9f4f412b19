use dioxus::prelude::*;
use shelf_domain::device::DeviceClass;

#[component]
pub fn About() -> Element {
    let device = use_context::<DeviceClass>();

    rsx! {
        section { class: "page page--about",
            h1 { "About" }
            p { "Shelf lists the books worth reading next." }
            p { class: "muted", "You are browsing the {device} layout." }
        }
    }
}
