use super::entity;
use super::usecase;
use crate::application::concerns::gateway::errors;

use bytes::Bytes;
use http::StatusCode;

#[derive(Clone)]
pub struct Gateway {
    usecase: usecase::Usecase,
}

impl Gateway {
    pub fn new(usecase: usecase::Usecase) -> Gateway {
        Gateway { usecase: usecase }
    }

    pub async fn list_users(&self) -> Box<dyn warp::Reply> {
        let users = self.usecase.list_users().await;

        Box::new(warp::reply::json(&entity::UserList { users: users }))
    }

    // echoes the requested id without consulting the datastore
    pub async fn user_details(&self, user_id: &str) -> Box<dyn warp::Reply> {
        let details = entity::UserDetails {
            id: user_id.to_string(),
            message: "User details".to_string(),
        };

        Box::new(warp::reply::json(&details))
    }

    pub async fn create_user(&self, payload: Bytes) -> Box<dyn warp::Reply> {
        let create_result = self.usecase.create_user(&payload).await;

        match create_result {
            Ok(user) => Box::new(warp::reply::with_status(
                warp::reply::json(&user),
                StatusCode::CREATED,
            )),
            Err(err) => map_usecase_errors(err),
        }
    }
}

fn map_usecase_errors(err: usecase::Error) -> Box<dyn warp::Reply> {
    let status_code = match err {
        usecase::Error::MalformedUserError { .. } => StatusCode::BAD_REQUEST,
    };

    errors::error_reply(err.to_string(), status_code)
}
