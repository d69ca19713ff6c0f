use super::view_model::SupplierDetailsViewModel;
use crate::shared::components::form_fields::{FormActions, FormError, TextField};
use crate::shared::components::tag_editor::TagEditor;
use contracts::domain::a003_supplier::aggregate::Supplier;
use leptos::prelude::*;

#[component]
pub fn SupplierDetails(
    initial: Option<Supplier>,
    on_submit: Callback<Supplier>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = SupplierDetailsViewModel::new(initial);
    let form = vm.form;

    view! {
        <div class="details-form">
            <TextField
                label="Наименование"
                required=true
                value=Signal::derive(move || form.with(|f| f.name.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.name = v))
            />
            <TextField
                label="Email"
                input_type="email"
                value=Signal::derive(move || form.with(|f| f.contact_email.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.contact_email = v))
            />
            <TextField
                label="Телефон"
                value=Signal::derive(move || form.with(|f| f.phone.clone()))
                on_input=Callback::new(move |v| form.update(|f| f.phone = v))
            />
            <TagEditor
                tags=Signal::derive(move || form.with(|f| f.tags.clone()))
                on_change=Callback::new(move |tags| form.update(|f| f.tags = tags))
            />
            <FormError error=vm.error />
            <FormActions
                on_save=Callback::new(move |_| vm.save_command(on_submit))
                on_cancel=on_cancel
            />
        </div>
    }
}
