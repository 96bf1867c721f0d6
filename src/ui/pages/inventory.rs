use dioxus::prelude::*;
use tracing::warn;

use crate::{
    domain::{AppState, EntryDraft, FormField, SoldIn, Unit},
    ui::{
        components::{
            entry_list::EntryList,
            form_row::FormRow,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

#[component]
pub fn InventoryPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let mut draft = use_signal(EntryDraft::new);

    let current = draft();
    let entries = state.with(|st| st.entries().to_vec());
    let export = match state.with(|st| st.export_json()) {
        Ok(json) => Some(json),
        Err(err) => {
            warn!(%err, "failed to serialise submitted entries");
            None
        }
    };

    let selected_unit = current.unit;
    let show_price = current.is_visible(FormField::Price);
    let show_sold_in = current.is_visible(FormField::SoldIn);
    let show_tablets = current.is_visible(FormField::TabletsPerStrip);
    let show_strips = current.is_visible(FormField::StripsPerPack);
    // Tablet prices are always numeric; other units accept free text and fall back to zero.
    let price_input_type = if selected_unit == Some(Unit::Tablet) { "number" } else { "text" };

    let on_submit = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        let mut draft = draft.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            match draft.with_mut(|d| d.submit()) {
                Ok(entry) => {
                    let name = entry.medicine_name.clone();
                    state.with_mut(|st| st.record(entry));
                    push_toast(toasts.clone(), ToastKind::Success, format!("Recorded {name}."));
                }
                Err(err) => {
                    warn!(%err, "entry rejected");
                    push_toast(toasts.clone(), ToastKind::Error, err.to_string());
                }
            }
        }
    };

    rsx! {
        form { onsubmit: on_submit,
            FormRow { field: FormField::MedicineName, html_for: "medicineName",
                input {
                    class: theme::INPUT,
                    id: "medicineName",
                    r#type: "text",
                    value: "{current.medicine_name}",
                    oninput: move |evt| draft.with_mut(|d| d.medicine_name = evt.value()),
                    required: true,
                }
            }

            FormRow { field: FormField::MedicineDescription, html_for: "medicineDescription",
                textarea {
                    class: theme::INPUT,
                    id: "medicineDescription",
                    rows: "4",
                    value: "{current.medicine_description}",
                    oninput: move |evt| draft.with_mut(|d| d.medicine_description = evt.value()),
                    required: true,
                }
            }

            FormRow { field: FormField::BatchNumber, html_for: "batchNumber",
                input {
                    class: theme::INPUT,
                    id: "batchNumber",
                    r#type: "text",
                    value: "{current.batch_number}",
                    oninput: move |evt| draft.with_mut(|d| d.batch_number = evt.value()),
                    required: true,
                }
            }

            FormRow { field: FormField::MedicineId, html_for: "medicineId",
                input {
                    class: theme::READ_ONLY_INPUT,
                    id: "medicineId",
                    r#type: "text",
                    value: "{current.medicine_id}",
                    readonly: true,
                }
            }

            FormRow { field: FormField::Unit, html_for: "unit",
                select {
                    class: theme::INPUT,
                    id: "unit",
                    onchange: move |evt| draft.with_mut(|d| d.set_unit(Unit::parse(&evt.value()))),
                    required: true,
                    option { value: "", selected: selected_unit.is_none(), "Select Unit" }
                    for unit in Unit::SELECTABLE {
                        option {
                            value: unit.as_str(),
                            selected: selected_unit == Some(unit),
                            "{unit.label()}"
                        }
                    }
                }
            }

            if show_price {
                FormRow { field: FormField::Price, html_for: "price",
                    input {
                        class: theme::INPUT,
                        id: "price",
                        r#type: price_input_type,
                        inputmode: "decimal",
                        value: "{current.price}",
                        oninput: move |evt| draft.with_mut(|d| d.price = evt.value()),
                        required: true,
                    }
                }
            }

            if show_sold_in {
                FormRow { field: FormField::SoldIn, html_for: "soldIn",
                    select {
                        class: theme::INPUT,
                        id: "soldIn",
                        onchange: move |evt| {
                            let sold_in = SoldIn::parse(&evt.value()).unwrap_or_default();
                            draft.with_mut(|d| d.sold_in = sold_in);
                        },
                        for sold_in in SoldIn::ALL {
                            option {
                                value: sold_in.as_str(),
                                selected: current.sold_in == sold_in,
                                "{sold_in.label()}"
                            }
                        }
                    }
                }
            }

            if show_tablets {
                FormRow { field: FormField::TabletsPerStrip, html_for: "tabletsPerStrip",
                    input {
                        class: theme::INPUT,
                        id: "tabletsPerStrip",
                        r#type: "number",
                        value: "{current.tablets_per_strip}",
                        oninput: move |evt| draft.with_mut(|d| d.tablets_per_strip = evt.value()),
                        required: true,
                    }
                }
            }

            if show_strips {
                FormRow { field: FormField::StripsPerPack, html_for: "stripPerPk",
                    input {
                        class: theme::INPUT,
                        id: "stripPerPk",
                        r#type: "number",
                        value: "{current.strips_per_pack}",
                        oninput: move |evt| draft.with_mut(|d| d.strips_per_pack = evt.value()),
                        required: true,
                    }
                }
            }

            FormRow { field: FormField::TotalQuantity, html_for: "totalQuantity",
                input {
                    class: theme::INPUT,
                    id: "totalQuantity",
                    r#type: "number",
                    value: "{current.total_quantity}",
                    oninput: move |evt| draft.with_mut(|d| d.total_quantity = evt.value()),
                    required: true,
                }
            }

            button { class: theme::BUTTON_PRIMARY, r#type: "submit", "Submit" }
        }

        EntryList { entries, export }
    }
}
