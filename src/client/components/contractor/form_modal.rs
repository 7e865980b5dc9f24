use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::api;
use crate::client::components::{Modal, Toasts};
use crate::client::config::ApiConfig;
use crate::client::util::format::{format_phone, format_tax_id, strip_digits};
use crate::model::contractor::ContractorDto;

pub const REQUIRED_FIELDS_WARNING: &str = "Preencha todos os campos obrigatórios.";

const TAX_ID_MAX_DIGITS: usize = 14;
const PHONE_MAX_DIGITS: usize = 11;

/// Local draft behind the contractor form. The masked fields (tax id,
/// phone) hold bare digits; the display string is re-derived per keystroke.
#[derive(Clone, Default, PartialEq)]
pub struct ContractorDraft {
    pub tax_id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub password: String,
}

impl ContractorDraft {
    pub fn from_existing(existing: Option<&ContractorDto>) -> Self {
        match existing {
            Some(contractor) => Self {
                tax_id: strip_digits(&contractor.tax_id),
                name: contractor.name.clone(),
                phone: strip_digits(&contractor.phone),
                email: contractor.email.clone(),
                address: contractor.address.clone(),
                password: String::new(),
            },
            None => Self::default(),
        }
    }

    /// Builds the wire record. The password only travels on creation; an
    /// update never re-sends it.
    pub fn record(&self, include_password: bool) -> Result<ContractorDto, &'static str> {
        if self.tax_id.is_empty() || self.name.trim().is_empty() {
            return Err(REQUIRED_FIELDS_WARNING);
        }
        let password = (include_password && !self.password.is_empty())
            .then(|| self.password.clone());
        Ok(ContractorDto {
            tax_id: self.tax_id.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            password,
        })
    }
}

fn capped_digits(value: &str, max: usize) -> String {
    let mut digits = strip_digits(value);
    digits.truncate(max);
    digits
}

/// Combined add/edit modal for contracting clients. In edit mode the tax id
/// (the immutable lookup key) and the write-only password are disabled.
#[component]
pub fn ContractorFormModal(
    existing: Option<ContractorDto>,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let config = use_context::<ApiConfig>();
    let mut toasts = use_context::<Toasts>();

    let editing = existing.is_some();
    let original_tax_id = existing
        .as_ref()
        .map(|contractor| strip_digits(&contractor.tax_id))
        .unwrap_or_default();
    let mut draft = use_signal(|| ContractorDraft::from_existing(existing.as_ref()));
    let mut submitting = use_signal(|| false);

    let title = if editing {
        "Editar Contratante"
    } else {
        "Novo Contratante"
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let record = match draft.read().record(!editing) {
            Ok(record) => record,
            Err(message) => {
                toasts.warning(message);
                return;
            }
        };
        let config = config.clone();
        let tax_id = original_tax_id.clone();
        submitting.set(true);
        spawn(async move {
            let result = if editing {
                api::contractors::update_contractor(&config, &tax_id, &record).await
            } else {
                api::contractors::create_contractor(&config, &record).await
            };
            match result {
                Ok(()) => {
                    if editing {
                        toasts.success("Contratante atualizado com sucesso!");
                    } else {
                        toasts.success("Contratante adicionado com sucesso!");
                    }
                    on_save.call(());
                    on_close.call(());
                }
                Err(error) => {
                    tracing::error!("failed to save contractor: {error}");
                    if editing {
                        toasts.error("Erro ao atualizar contratante.");
                    } else {
                        toasts.error("Erro ao adicionar contratante.");
                    }
                    submitting.set(false);
                }
            }
        });
    };

    rsx! {
        Modal { title: "{title}", on_close,
            form { class: "space-y-3", onsubmit: submit,
                div {
                    label { class: "label font-medium", "CPF/CNPJ" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        placeholder: "CPF/CNPJ",
                        maxlength: "18",
                        disabled: editing,
                        value: format_tax_id(&draft.read().tax_id),
                        oninput: move |evt| {
                            draft.write().tax_id = capped_digits(&evt.value(), TAX_ID_MAX_DIGITS);
                        },
                    }
                }
                div {
                    label { class: "label font-medium", "Nome" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        placeholder: "Nome",
                        value: draft.read().name.clone(),
                        oninput: move |evt| draft.write().name = evt.value(),
                    }
                }
                div {
                    label { class: "label font-medium", "Email" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "email",
                        placeholder: "Email",
                        value: draft.read().email.clone(),
                        oninput: move |evt| draft.write().email = evt.value(),
                    }
                }
                div {
                    label { class: "label font-medium", "Telefone" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        placeholder: "Telefone",
                        maxlength: "15",
                        value: format_phone(&draft.read().phone),
                        oninput: move |evt| {
                            draft.write().phone = capped_digits(&evt.value(), PHONE_MAX_DIGITS);
                        },
                    }
                }
                div {
                    label { class: "label font-medium", "Endereço" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "text",
                        placeholder: "Endereço",
                        value: draft.read().address.clone(),
                        oninput: move |evt| draft.write().address = evt.value(),
                    }
                }
                div {
                    label { class: "label font-medium", "Senha" }
                    input {
                        class: "input input-bordered w-full",
                        r#type: "password",
                        placeholder: "Senha",
                        disabled: editing,
                        value: if editing { "••••••••".to_string() } else { draft.read().password.clone() },
                        oninput: move |evt| draft.write().password = evt.value(),
                    }
                }
                div { class: "flex justify-end gap-2 pt-2",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() {
                            span { class: "loading loading-spinner loading-xs" }
                        }
                        "Salvar"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled_draft() -> ContractorDraft {
        ContractorDraft {
            tax_id: "12345678901".into(),
            name: "Construtora Azul".into(),
            phone: "1133334444".into(),
            email: "contato@azul.com.br".into(),
            address: "Av. Paulista, 1000".into(),
            password: "segredo".into(),
        }
    }

    #[test]
    fn record_carries_the_password_only_on_creation() {
        let record = filled_draft().record(true).unwrap();
        assert_eq!(record.password.as_deref(), Some("segredo"));

        let record = filled_draft().record(false).unwrap();
        assert_eq!(record.password, None);
    }

    #[test]
    fn missing_key_fields_abort_the_submission() {
        let draft = ContractorDraft {
            tax_id: String::new(),
            ..filled_draft()
        };
        assert_eq!(draft.record(true).unwrap_err(), REQUIRED_FIELDS_WARNING);

        let draft = ContractorDraft {
            name: "  ".into(),
            ..filled_draft()
        };
        assert_eq!(draft.record(true).unwrap_err(), REQUIRED_FIELDS_WARNING);
    }

    #[test]
    fn existing_records_are_loaded_with_masks_stripped() {
        let existing = ContractorDto {
            tax_id: "123.456.789-01".into(),
            name: "Construtora Azul".into(),
            phone: "(11) 3333-4444".into(),
            email: "contato@azul.com.br".into(),
            address: "Av. Paulista, 1000".into(),
            password: None,
        };

        let draft = ContractorDraft::from_existing(Some(&existing));
        assert_eq!(draft.tax_id, "12345678901");
        assert_eq!(draft.phone, "1133334444");
        assert_eq!(draft.password, "");
    }

    #[test]
    fn typed_input_is_capped_at_the_mask_length() {
        assert_eq!(capped_digits("123.456.789/0123-456789", 14), "12345678901234");
        assert_eq!(capped_digits("(11) 98765-4321 ramal 2", 11), "11987654321");
    }
}
