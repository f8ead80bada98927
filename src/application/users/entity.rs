use serde::{Deserialize, Serialize};

// inbound payloads may omit any field, matching how clients of the demo
// behave in practice; an id sent by the client decodes but the datastore
// overwrites it on append
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct UserList {
    pub users: Vec<User>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct UserDetails {
    pub id: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_serializes_id_and_name() {
        let user = User {
            id: 1,
            name: "Alice".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            serde_json::json!({ "id": 1, "name": "Alice" })
        );
    }

    #[test]
    fn user_decode_defaults_absent_fields() {
        let user: User = serde_json::from_str("{}").unwrap();

        assert_eq!(
            user,
            User {
                id: 0,
                name: String::new(),
            }
        );
    }

    #[test]
    fn user_decode_rejects_numeric_name() {
        let result = serde_json::from_str::<User>(r#"{"name": 3}"#);

        assert!(result.is_err());
    }

    #[test]
    fn user_decode_carries_a_supplied_id() {
        let user: User = serde_json::from_str(r#"{"id": 9, "name": "Eve"}"#).unwrap();

        assert_eq!(user.id, 9);
    }
}
