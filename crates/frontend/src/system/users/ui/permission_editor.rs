//! Grouped permission picker used by the user forms.
//!
//! One block per catalog category; the header checkbox selects or clears the
//! whole category and shows the mixed state for a partial selection.

use contracts::system::access::{catalog, CategoryState, PermissionCategory, PermissionSet};
use leptos::prelude::*;

use crate::shared::components::ui::checkbox::Checkbox;

#[component]
pub fn PermissionEditor(selection: RwSignal<PermissionSet>) -> impl IntoView {
    view! {
        <div class="permission-editor">
            {catalog()
                .categories()
                .iter()
                .map(|category| view! { <CategoryBlock category=*category selection=selection /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn CategoryBlock(category: PermissionCategory, selection: RwSignal<PermissionSet>) -> impl IntoView {
    let state = Memo::new(move |_| selection.with(|s| s.category_state(&category)));
    let selected_count = move || {
        selection.with(|s| category.keys().filter(|key| s.contains(key)).count())
    };
    let total = category.permissions.len();

    view! {
        <fieldset class="permission-editor__category">
            <legend class="permission-editor__header">
                <Checkbox
                    label=category.name.to_string()
                    checked=Signal::derive(move || state.get() == CategoryState::All)
                    indeterminate=Signal::derive(move || state.get() == CategoryState::Partial)
                    on_change=Callback::new(move |_: bool| {
                        selection.update(|s| s.toggle_category(&category));
                    })
                />
                <span class="permission-editor__count">
                    {move || format!("{}/{}", selected_count(), total)}
                </span>
            </legend>
            <div class="permission-editor__items">
                {category
                    .permissions
                    .iter()
                    .map(|permission| {
                        let key = permission.key;
                        view! {
                            <Checkbox
                                id=key.to_string()
                                label=permission.label.to_string()
                                checked=Signal::derive(move || selection.with(|s| s.contains(key)))
                                on_change=Callback::new(move |_: bool| {
                                    selection.update(|s| s.toggle(key));
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </fieldset>
    }
}
