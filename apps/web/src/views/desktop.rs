use super::Chrome;
use crate::routes::Route;
use dioxus::prelude::*;

#[component]
pub fn DesktopApp() -> Element {
    use_context_provider(|| Chrome::TopBar);

    rsx! {
        div { class: "shell shell--desktop",
            Router::<Route> {}
        }
    }
}
