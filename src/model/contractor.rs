use serde::{Deserialize, Serialize};

/// Contracting client exchanged with `/clientes`.
///
/// `CPF_CNPJ` is the natural key and is immutable once created: updates and
/// deletes address the record by it. `Senha` is write-only; the API never
/// returns it, and it is only sent when creating a new record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractorDto {
    #[serde(rename = "CPF_CNPJ", deserialize_with = "super::lenient_string")]
    pub tax_id: String,
    #[serde(rename = "Nome")]
    pub name: String,
    #[serde(rename = "Telefone", deserialize_with = "super::lenient_string", default)]
    pub phone: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Endereco", default)]
    pub address: String,
    #[serde(rename = "Senha", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn deserializes_without_password() {
        let contractor: ContractorDto = serde_json::from_value(json!({
            "CPF_CNPJ": "12345678901",
            "Nome": "Construtora Azul",
            "Telefone": "1133334444",
            "Email": "contato@azul.com.br",
            "Endereco": "Av. Paulista, 1000"
        }))
        .unwrap();

        assert_eq!(contractor.tax_id, "12345678901");
        assert_eq!(contractor.password, None);
    }

    #[test]
    fn password_is_omitted_when_absent() {
        let contractor = ContractorDto {
            tax_id: "12345678901".into(),
            name: "Construtora Azul".into(),
            phone: "1133334444".into(),
            email: "contato@azul.com.br".into(),
            address: "Av. Paulista, 1000".into(),
            password: None,
        };

        let value = serde_json::to_value(&contractor).unwrap();
        assert!(value.get("Senha").is_none());

        let with_password = ContractorDto {
            password: Some("segredo".into()),
            ..contractor
        };
        assert_eq!(
            serde_json::to_value(&with_password).unwrap()["Senha"],
            json!("segredo")
        );
    }
}
