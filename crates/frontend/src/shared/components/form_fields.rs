//! Поля форм справочников (BEM-классы `form__*`)

use leptos::prelude::*;

/// Текстовое поле с подписью
#[component]
pub fn TextField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    on_input: Callback<String>,
    /// Input type: "text" (default), "email", "date", "number"
    #[prop(optional, default = "text")]
    input_type: &'static str,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">
                {label}
                {required.then_some(view! { <span class="form__required">" *"</span> })}
            </label>
            <input
                class="form__input"
                type=input_type
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <div class="form__checkbox-wrapper">
            <label class="form__checkbox-label">
                <input
                    type="checkbox"
                    class="form__checkbox"
                    prop:checked=move || checked.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                {label}
            </label>
        </div>
    }
}

/// Выпадающий список: пары (значение, подпись)
#[component]
pub fn SelectField(
    #[prop(into)]
    label: String,
    #[prop(into)]
    value: Signal<String>,
    options: Vec<(String, String)>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, caption)| {
                        let selected_value = option_value.clone();
                        view! {
                            <option value=option_value selected=move || value.get() == selected_value>
                                {caption}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Кнопки подвала формы
#[component]
pub fn FormActions(on_save: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    use thaw::*;
    view! {
        <div class="modal-footer">
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                "Отмена"
            </Button>
            <Button appearance=ButtonAppearance::Primary on_click=move |_| on_save.run(())>
                "Сохранить"
            </Button>
        </div>
    }
}

/// Ошибка валидации под полями формы
#[component]
pub fn FormError(error: RwSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|message| view! { <div class="form__error">{message}</div> })
}
