use super::view_model::DiscountDetailsViewModel;
use crate::shared::components::form_fields::{CheckboxField, FormActions, FormError, TextField};
use contracts::domain::a004_discount::aggregate::Discount;
use leptos::prelude::*;

#[component]
pub fn DiscountDetails(
    initial: Option<Discount>,
    on_submit: Callback<Discount>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = DiscountDetailsViewModel::new(initial);
    let form = vm.form;

    view! {
        <div class="details-form">
            <TextField
                label="Наименование"
                required=true
                value=Signal::derive(move || form.with(|d| d.record.name.clone()))
                on_input=Callback::new(move |v| form.update(|d| d.record.name = v))
            />
            <TextField
                label="Процент"
                required=true
                value=Signal::derive(move || form.with(|d| d.percent.clone()))
                on_input=Callback::new(move |v| form.update(|d| d.percent = v))
            />
            <div class="form__row">
                <TextField
                    label="Действует с"
                    input_type="date"
                    required=true
                    value=Signal::derive(move || form.with(|d| d.valid_from.clone()))
                    on_input=Callback::new(move |v| form.update(|d| d.valid_from = v))
                />
                <TextField
                    label="по"
                    input_type="date"
                    value=Signal::derive(move || form.with(|d| d.valid_until.clone()))
                    on_input=Callback::new(move |v| form.update(|d| d.valid_until = v))
                />
            </div>
            <CheckboxField
                label="Активна"
                checked=Signal::derive(move || form.with(|d| d.record.is_active))
                on_change=Callback::new(move |v| form.update(|d| d.record.is_active = v))
            />
            <FormError error=vm.error />
            <FormActions
                on_save=Callback::new(move |_| vm.save_command(on_submit))
                on_cancel=on_cancel
            />
        </div>
    }
}
