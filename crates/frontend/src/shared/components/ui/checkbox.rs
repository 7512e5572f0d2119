use leptos::prelude::*;

/// Checkbox with an optional mixed state.
///
/// `indeterminate` only affects rendering; the value sent to `on_change` is
/// always the browser's new checked flag.
#[component]
pub fn Checkbox(
    #[prop(into)]
    label: Signal<String>,
    #[prop(into)]
    checked: Signal<bool>,
    #[prop(optional, into)]
    indeterminate: Signal<bool>,
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// Additional CSS classes for wrapper
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        let mixed = indeterminate.get();
        if let Some(input) = input_ref.get() {
            input.set_indeterminate(mixed);
        }
    });

    let checkbox_id = move || id.get().unwrap_or_default();
    let wrapper_class = move || {
        let extra = class.get().unwrap_or_default();
        if disabled {
            format!("form__checkbox-wrapper form__checkbox-wrapper--disabled {}", extra)
        } else {
            format!("form__checkbox-wrapper {}", extra)
        }
    };

    view! {
        <div class=wrapper_class>
            <input
                node_ref=input_ref
                id=checkbox_id
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || checked.get()
                disabled=disabled
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <label class="form__checkbox-label" for=checkbox_id>
                {label}
            </label>
        </div>
    }
}
