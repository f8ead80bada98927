use super::entity;
use super::memory;
use snafu::Snafu;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Malformed user payload: {}", source))]
    MalformedUserError { source: serde_json::Error },
}

#[derive(Clone)]
pub struct Usecase {
    datastore: memory::Memory,
}

impl Usecase {
    pub fn new(user_datastore: memory::Memory) -> Usecase {
        Usecase {
            datastore: user_datastore,
        }
    }

    pub async fn list_users(&self) -> Vec<entity::User> {
        self.datastore.list_users().await
    }

    pub async fn create_user(&self, payload: &[u8]) -> Result<entity::User, Error> {
        let new_user: entity::User = serde_json::from_slice(payload)
            .map_err(|err| Error::MalformedUserError { source: err })?;

        Ok(self.datastore.append_user(new_user).await)
    }
}
