use crate::shared::components::tag_filter_panel::FilterTag;
use crate::shared::tag_filter::tag_from_input;
use contracts::shared::tags::{push_unique, remove_tag, AttributeTag};
use leptos::prelude::*;
use thaw::*;

/// Редактор атрибутов записи
///
/// Повтор пары (метка, значение) отклоняется с ошибкой под полями ввода.
#[component]
pub fn TagEditor(
    #[prop(into)]
    tags: Signal<Vec<AttributeTag>>,
    /// Новый список атрибутов
    on_change: Callback<Vec<AttributeTag>>,
) -> impl IntoView {
    let label_input = RwSignal::new(String::new());
    let values_input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let add_tag = move || {
        let mut next = tags.get_untracked();
        let result = tag_from_input(&label_input.get_untracked(), &values_input.get_untracked())
            .and_then(|tag| push_unique(&mut next, tag));
        match result {
            Ok(()) => {
                error.set(None);
                label_input.set(String::new());
                values_input.set(String::new());
                on_change.run(next);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let on_chip_remove = move |label: String, value: String| {
        let mut next = tags.get_untracked();
        if remove_tag(&mut next, &label, &value) {
            on_change.run(next);
        }
    };

    view! {
        <div class="form__group tag-editor">
            <label class="form__label">"Атрибуты"</label>
            <div class="filter-tags">
                {move || {
                    tags.get()
                        .into_iter()
                        .map(|tag| {
                            let label = tag.label.clone();
                            let value = tag.value_string();
                            view! {
                                <FilterTag
                                    label=tag.to_string()
                                    on_remove=Callback::new(move |_| on_chip_remove(label.clone(), value.clone()))
                                />
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="form__row">
                <input
                    class="form__input"
                    placeholder="Атрибут"
                    prop:value=move || label_input.get()
                    on:input=move |ev| label_input.set(event_target_value(&ev))
                />
                <input
                    class="form__input"
                    placeholder="Значения через запятую"
                    prop:value=move || values_input.get()
                    on:input=move |ev| values_input.set(event_target_value(&ev))
                />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| add_tag()>
                    "Прикрепить"
                </Button>
            </div>
            {move || error.get().map(|message| view! { <div class="form__error">{message}</div> })}
        </div>
    }
}
