use super::view_model::CategoryDetailsViewModel;
use crate::shared::components::form_fields::{FormActions, FormError, SelectField, TextField};
use contracts::domain::a002_category::aggregate::Category;
use leptos::prelude::*;

#[component]
pub fn CategoryDetails(
    initial: Option<Category>,
    /// Наименования категорий, доступных как родитель
    parents: Vec<String>,
    on_submit: Callback<Category>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsViewModel::new(initial);
    let form = vm.form;

    let own_name = form.with_untracked(|d| d.record.name.clone());
    let mut parent_options = vec![(String::new(), "(корневая)".to_string())];
    parent_options.extend(
        parents
            .into_iter()
            .filter(|p| *p != own_name)
            .map(|p| (p.clone(), p)),
    );

    view! {
        <div class="details-form">
            <TextField
                label="Наименование"
                required=true
                value=Signal::derive(move || form.with(|d| d.record.name.clone()))
                on_input=Callback::new(move |v| form.update(|d| d.record.name = v))
            />
            <SelectField
                label="Родитель"
                value=Signal::derive(move || form.with(|d| d.record.parent.clone().unwrap_or_default()))
                options=parent_options
                on_change=Callback::new(move |v: String| {
                    form.update(|d| d.record.parent = (!v.is_empty()).then_some(v))
                })
            />
            <TextField
                label="Описание"
                value=Signal::derive(move || form.with(|d| d.record.description.clone()))
                on_input=Callback::new(move |v| form.update(|d| d.record.description = v))
            />
            <TextField
                label="Порядок сортировки"
                input_type="number"
                value=Signal::derive(move || form.with(|d| d.sort_order.clone()))
                on_input=Callback::new(move |v| form.update(|d| d.sort_order = v))
            />
            <FormError error=vm.error />
            <FormActions
                on_save=Callback::new(move |_| vm.save_command(on_submit))
                on_cancel=on_cancel
            />
        </div>
    }
}
