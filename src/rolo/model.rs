use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(deserialize_with = "coerce_id")]
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(id: u32, name: String, email: String, phone: String) -> Self {
        Self {
            id,
            name,
            email,
            phone,
        }
    }
}

/// Older data files stored ids as JSON strings; accept both forms on load.
fn coerce_id<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u32),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid contact id: {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_id() {
        let contact: Contact =
            serde_json::from_str(r#"{"id":3,"name":"Ann","email":"a@x.io","phone":"111"}"#)
                .unwrap();
        assert_eq!(contact.id, 3);
    }

    #[test]
    fn coerces_string_id() {
        let contact: Contact =
            serde_json::from_str(r#"{"id":"7","name":"Ann","email":"a@x.io","phone":"111"}"#)
                .unwrap();
        assert_eq!(contact.id, 7);
    }

    #[test]
    fn rejects_non_numeric_string_id() {
        let result: Result<Contact, _> =
            serde_json::from_str(r#"{"id":"x1","name":"Ann","email":"a@x.io","phone":"111"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_id_as_number() {
        let contact = Contact::new(1, "Ann".into(), "a@x.io".into(), "111".into());
        let json = serde_json::to_string(&contact).unwrap();
        assert!(json.contains(r#""id":1"#));
    }
}
