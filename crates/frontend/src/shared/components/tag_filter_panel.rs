use crate::shared::icons::icon;
use crate::shared::tag_filter::{tag_from_input, TagFilterSet};
use contracts::shared::tags::{AttributeTag, TagError};
use leptos::prelude::*;
use thaw::*;

/// TagFilterPanel - сворачиваемая панель фильтра по атрибутам
///
/// Условие вводится как метка и список значений через запятую. Повторное
/// добавление той же пары (метка, значение) показывает ошибку под полями.
#[component]
pub fn TagFilterPanel(
    filter: RwSignal<TagFilterSet>,

    /// Известные метки атрибутов (подсказки для поля ввода)
    #[prop(optional)]
    known_labels: Vec<String>,

    /// Вызывается после каждого изменения фильтра
    on_change: Callback<()>,

    /// «Выбрать подходящие»: добавить к выбору строки, прошедшие фильтр
    #[prop(optional)]
    on_select_matching: Option<Callback<()>>,

    /// Прикрепить введённый атрибут к выбранным строкам; результат - число
    /// строк, получивших атрибут
    #[prop(optional)]
    on_attach: Option<Callback<AttributeTag, Result<usize, TagError>>>,
) -> impl IntoView {
    let is_expanded = RwSignal::new(false);
    let label_input = RwSignal::new(String::new());
    let values_input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let info = RwSignal::new(None::<String>);

    let add_condition = move || {
        let parsed = tag_from_input(&label_input.get_untracked(), &values_input.get_untracked());
        let result = parsed.and_then(|tag| {
            filter
                .try_update(|f| f.add(tag))
                .unwrap_or(Ok(()))
        });
        match result {
            Ok(()) => {
                error.set(None);
                info.set(None);
                values_input.set(String::new());
                on_change.run(());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let attach_to_selected = move |attach: Callback<AttributeTag, Result<usize, TagError>>| {
        let parsed = tag_from_input(&label_input.get_untracked(), &values_input.get_untracked());
        match parsed.and_then(|tag| attach.run(tag)) {
            Ok(count) => {
                error.set(None);
                info.set(Some(format!("Атрибут прикреплён к записям: {}", count)));
            }
            Err(e) => {
                info.set(None);
                error.set(Some(e.to_string()));
            }
        }
    };

    let remove_condition = move |label: String, value: String| {
        filter.update(|f| {
            f.remove(&label, &value);
        });
        on_change.run(());
    };

    let clear_all = move |_: leptos::ev::MouseEvent| {
        filter.update(TagFilterSet::clear);
        error.set(None);
        on_change.run(());
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтр по атрибутам"</span>
                    {move || {
                        let count = filter.with(TagFilterSet::len);
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    <div class="form__row">
                        <input
                            class="form__input"
                            list="tag-filter-labels"
                            placeholder="Атрибут"
                            prop:value=move || label_input.get()
                            on:input=move |ev| label_input.set(event_target_value(&ev))
                        />
                        <datalist id="tag-filter-labels">
                            {known_labels
                                .into_iter()
                                .map(|label| view! { <option value=label></option> })
                                .collect_view()}
                        </datalist>
                        <input
                            class="form__input"
                            placeholder="Значения через запятую"
                            prop:value=move || values_input.get()
                            on:input=move |ev| values_input.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    add_condition();
                                }
                            }
                        />
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| add_condition()>
                            "Добавить"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=clear_all
                            disabled=Signal::derive(move || filter.with(TagFilterSet::is_empty))
                        >
                            "Сбросить"
                        </Button>
                        {on_select_matching.map(|select| view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| select.run(())
                                disabled=Signal::derive(move || filter.with(TagFilterSet::is_empty))
                            >
                                "Выбрать подходящие"
                            </Button>
                        })}
                        {on_attach.map(|attach| view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| attach_to_selected(attach)
                            >
                                "Прикрепить к выбранным"
                            </Button>
                        })}
                    </div>
                    {move || error.get().map(|message| view! {
                        <div class="form__error">{message}</div>
                    })}
                    {move || info.get().map(|message| view! {
                        <div class="form__info">{message}</div>
                    })}
                    <div class="filter-tags">
                        {move || {
                            filter
                                .get()
                                .tags()
                                .iter()
                                .map(|tag| {
                                    let label = tag.label.clone();
                                    let value = tag.value_string();
                                    view! {
                                        <FilterTag
                                            label=tag.to_string()
                                            on_remove=Callback::new(move |_| {
                                                remove_condition(label.clone(), value.clone())
                                            })
                                        />
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// FilterTag - чип активного условия
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                title="Убрать"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
