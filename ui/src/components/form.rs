//! Interactive form block
//!
//! Same markup as the server-rendered preview, but every control commits
//! its value into a per-instance `FormState` signal as the user types.

use blockform_core::blocks as model;
use blockform_core::render::SELECT_PLACEHOLDER;
use blockform_core::{
    FieldDescriptor, FieldIndex, FieldValue, FormSnapshot, FormSpec, FormState, InputEvent,
};
use leptos::prelude::*;

// ============================================================================
// Form Block
// ============================================================================

/// Renders a form block. State lives as long as the component: a fresh
/// `FormState` on mount, dropped on unmount.
#[component]
pub fn FormBlock(
    block: model::FormBlock,
    /// Receives the snapshot after it has been logged
    #[prop(optional)]
    on_submit: Option<Callback<FormSnapshot>>,
) -> impl IntoView {
    let spec = block.spec();
    let state = RwSignal::new(FormState::new());

    let submit_spec = spec.clone();
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let snapshot = state.with(|s| s.snapshot(&submit_spec));
        log::info!("Form values: {}", snapshot.to_json());
        if let Some(callback) = on_submit {
            callback.run(snapshot);
        }
    };

    let FormSpec {
        fields,
        title,
        description,
    } = spec;

    view! {
        <div class="form-container">
            <div class="form-wrapper">
                {title
                    .filter(|t| !t.is_empty())
                    .map(|t| view! { <h2 class="form-heading">{t}</h2> })}
                {description
                    .filter(|d| !d.is_empty())
                    .map(|d| view! { <p class="form-description">{d}</p> })}
                <form on:submit=handle_submit>
                    {fields
                        .into_iter()
                        .enumerate()
                        .map(|(index, field)| view! { <FieldControl index=index field=field state=state /> })
                        .collect_view()}
                    <div class="form-field">
                        <button type="submit" class="submit-button">"Submit"</button>
                    </div>
                </form>
            </div>
        </div>
    }
}

// ============================================================================
// Field Controls
// ============================================================================

#[component]
fn FieldControl(index: FieldIndex, field: FieldDescriptor, state: RwSignal<FormState>) -> impl IntoView {
    let kind = field.kind();
    let name = format!("field-{}", index);
    let on_text = move |ev: leptos::ev::Event| {
        state.update(|s| {
            s.apply(InputEvent::Text {
                index,
                value: event_target_value(&ev),
            })
        });
    };
    let current_text = move || state.with(|s| s.text(index).to_string());

    let control = match field {
        FieldDescriptor::Radio { label, options } => view! {
            <label class="form-label">{label}</label>
            <div class="radio-group">
                {options
                    .into_iter()
                    .map(|option| {
                        let value = option.value;
                        let checked_value = value.clone();
                        let is_checked = move || {
                            state.with(|s| {
                                s.get(index).and_then(FieldValue::as_str) == Some(checked_value.as_str())
                            })
                        };
                        view! {
                            <label class="radio-item">
                                <input
                                    type="radio"
                                    name=name.clone()
                                    value=value.clone()
                                    class="radio-input"
                                    prop:checked=is_checked
                                    on:change=on_text
                                />
                                <span>{value}</span>
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
        }
        .into_any(),
        FieldDescriptor::Select { label, options } => view! {
            <label class="form-label">{label}</label>
            <select class="form-select" name=name prop:value=current_text on:change=on_text>
                <option value="" disabled=true>{SELECT_PLACEHOLDER}</option>
                {options
                    .into_iter()
                    .map(|option| {
                        let value = option.value;
                        view! { <option value=value.clone()>{value.clone()}</option> }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldDescriptor::Checkbox { label } => view! {
            <label class="checkbox-item">
                <input
                    type="checkbox"
                    name=name
                    class="checkbox-input"
                    prop:checked=move || state.with(|s| s.checked(index))
                    on:change=move |ev| {
                        state.update(|s| {
                            s.apply(InputEvent::Checked {
                                index,
                                checked: event_target_checked(&ev),
                            })
                        });
                    }
                />
                {label}
            </label>
        }
        .into_any(),
        FieldDescriptor::Textarea { label, placeholder } => view! {
            <label class="form-label">{label}</label>
            <textarea
                class="form-textarea"
                name=name
                placeholder=placeholder
                prop:value=current_text
                on:input=on_text
            ></textarea>
        }
        .into_any(),
        FieldDescriptor::Text { label, placeholder }
        | FieldDescriptor::Number { label, placeholder }
        | FieldDescriptor::Email { label, placeholder }
        | FieldDescriptor::Tel { label, placeholder } => view! {
            <label class="form-label">{label}</label>
            <input
                type=kind.as_str()
                name=name
                class="form-input"
                placeholder=placeholder
                prop:value=current_text
                on:input=on_text
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field" data-field-index=index.to_string()>
            {control}
        </div>
    }
}
