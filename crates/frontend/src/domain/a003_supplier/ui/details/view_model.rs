use contracts::domain::a003_supplier::aggregate::Supplier;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct SupplierDetailsViewModel {
    pub form: RwSignal<Supplier>,
    pub error: RwSignal<Option<String>>,
}

impl SupplierDetailsViewModel {
    pub fn new(initial: Option<Supplier>) -> Self {
        Self {
            form: RwSignal::new(initial.unwrap_or_default()),
            error: RwSignal::new(None),
        }
    }

    pub fn save_command(&self, on_submit: Callback<Supplier>) {
        let mut current = self.form.get_untracked();
        current.contact_email = current.contact_email.trim().to_string();
        match current.validate() {
            Ok(()) => {
                self.error.set(None);
                on_submit.run(current);
            }
            Err(e) => self.error.set(Some(e)),
        }
    }
}
