use dioxus::prelude::*;

use crate::domain::FormField;
use crate::ui::theme;

/// Labelled wrapper around a single form control.
#[component]
pub fn FormRow(field: FormField, html_for: &'static str, children: Element) -> Element {
    rsx! {
        div { class: theme::FIELD,
            label { class: theme::LABEL, r#for: html_for, "{field.label()}:" }
            {children}
        }
    }
}
