use super::view_model::BrandDetailsViewModel;
use crate::shared::components::form_fields::{CheckboxField, FormActions, FormError, TextField};
use contracts::domain::a001_brand::aggregate::Brand;
use leptos::prelude::*;

#[component]
pub fn BrandDetails(
    initial: Option<Brand>,
    on_submit: Callback<Brand>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = BrandDetailsViewModel::new(initial);
    let form = vm.form;

    view! {
        <div class="details-form">
            <TextField
                label="Код"
                required=true
                value=Signal::derive(move || form.with(|f| f.code.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.code = v))
                placeholder="Например, TATA"
            />
            <TextField
                label="Наименование"
                required=true
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.name = v))
            />
            <TextField
                label="Страна"
                value=Signal::derive(move || form.with(|f| f.country.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.country = v))
            />
            <TextField
                label="Комментарий"
                value=Signal::derive(move || form.with(|f| f.comment.clone().unwrap_or_default()))
                on_input=Callback::new(move |v| form.update(|f| f.comment = Some(v)))
            />
            <CheckboxField
                label="Активен"
                checked=Signal::derive(move || form.with(|f| f.is_active))
                on_change=Callback::new(move |v| form.update(|f| f.is_active = v))
            />
            <FormError error=vm.error />
            <FormActions
                on_save=Callback::new(move |_| vm.save_command(on_submit))
                on_cancel=on_cancel
            />
        </div>
    }
}
