use dioxus::prelude::*;

/// `(title, author)` pairs shown on the books page.
pub const CATALOGUE: &[(&str, &str)] = &[
    ("The Rust Programming Language", "Steve Klabnik & Carol Nichols"),
    ("Programming Rust", "Jim Blandy, Jason Orendorff & Leonora Tindall"),
    ("Rust for Rustaceans", "Jon Gjengset"),
    ("Zero To Production In Rust", "Luca Palmieri"),
];

#[component]
pub fn Books() -> Element {
    rsx! {
        section { class: "page page--books",
            h1 { "Books" }
            ul {
                for (title, author) in CATALOGUE {
                    li { key: "{title}",
                        span { class: "title", "{title}" }
                        " by "
                        span { class: "author", "{author}" }
                    }
                }
            }
        }
    }
}
