use dioxus::prelude::*;

use ui::views::AboutView;

#[component]
pub fn About() -> Element {
    rsx! {
        AboutView {}
    }
}
