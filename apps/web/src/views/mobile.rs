use super::Chrome;
use crate::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn MobileApp() -> Element {
    use_context_provider(|| Chrome::TabBar);

    rsx! {
        div { class: "shell shell--mobile",
            Router::<Route> {}
        }
    }
}
