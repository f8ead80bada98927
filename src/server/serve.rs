use std::net::SocketAddr;

use crate::application::users::memory;
use crate::server::info;
use crate::server::users;

use warp::Filter;

pub fn routes(
    user_datastore: memory::Memory,
) -> warp::filters::BoxedFilter<(impl warp::reply::Reply,)> {
    info::info_server()
        .or(users::users_server(user_datastore))
        .with(warp::log("api"))
        .boxed()
}

pub async fn serve(addr: impl Into<SocketAddr> + 'static) {
    let user_datastore = memory::Memory::new();
    let addr = addr.into();

    log::info!("binding to {}", addr);

    warp::serve(routes(user_datastore)).run(addr).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::users::entity;
    use http::StatusCode;

    #[tokio::test]
    async fn serves_api_info_at_root() {
        let routes = routes(memory::Memory::new());

        let response = warp::test::request()
            .method("GET")
            .path("/")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);

        let info: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(info["features"].as_array().unwrap().len(), 5);
        assert_eq!(info["status"], "✅ Running");
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let routes = routes(memory::Memory::new());

        let response = warp::test::request()
            .method("GET")
            .path("/api/unknown")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_then_list_through_composed_routes() {
        let routes = routes(memory::Memory::new());

        let response = warp::test::request()
            .method("POST")
            .path("/api/users")
            .json(&serde_json::json!({ "name": "Carol" }))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::CREATED);

        let created: entity::User = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(
            created,
            entity::User {
                id: 3,
                name: "Carol".to_string(),
            }
        );

        let response = warp::test::request()
            .method("GET")
            .path("/api/users")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), StatusCode::OK);

        let list: entity::UserList = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(list.users.len(), 3);
        assert_eq!(list.users[2].name, "Carol");
    }
}
