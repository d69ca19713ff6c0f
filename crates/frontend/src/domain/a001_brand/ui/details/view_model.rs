use contracts::domain::a001_brand::aggregate::Brand;
use leptos::prelude::*;

/// ViewModel формы бренда
#[derive(Clone, Copy)]
pub struct BrandDetailsViewModel {
    pub form: RwSignal<Brand>,
    pub error: RwSignal<Option<String>>,
}

impl BrandDetailsViewModel {
    pub fn new(initial: Option<Brand>) -> Self {
        let form = initial.unwrap_or_else(|| Brand {
            is_active: true,
            ..Default::default()
        });
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
        }
    }

    /// Проверить форму и передать значения наружу
    pub fn save_command(&self, on_submit: Callback<Brand>) {
        let mut current = self.form.get_untracked();
        current.code = current.code.trim().to_uppercase();
        current.comment = current.comment.filter(|c| !c.trim().is_empty());
        match current.validate() {
            Ok(()) => {
                self.error.set(None);
                on_submit.run(current);
            }
            Err(e) => self.error.set(Some(e)),
        }
    }
}
