use dioxus::prelude::*;

use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        div { class: theme::PAGE,
            header { class: theme::HEADER,
                h1 { class: theme::HEADER_TITLE, "{APP_NAME}" }
                span { class: theme::HEADER_VERSION, "{version}" }
            }
            main { class: theme::FORM_WRAPPER,
                {children}
            }
        }
    }
}
