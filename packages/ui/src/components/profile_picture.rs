use dioxus::prelude::*;

use crate::Icon;
use crate::icons::FaUser;

/// Thumbnail that falls back to a placeholder when the URL is empty or the
/// image fails to load.
#[component]
pub fn ProfilePicture(url: String, #[props(default)] alt: String) -> Element {
    let mut failed_url = use_signal(|| Option::<String>::None);

    let failed = failed_url.read().as_deref() == Some(url.as_str());
    if url.trim().is_empty() || failed {
        return rsx! {
            span {
                class: "profile-picture placeholder",
                title: "{alt}",
                Icon { icon: FaUser, width: 16, height: 16 }
            }
        };
    }

    let src = url.clone();
    rsx! {
        img {
            class: "profile-picture",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| failed_url.set(Some(url.clone())),
        }
    }
}
