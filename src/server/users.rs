use super::cors;
use crate::application::users::gateway;
use crate::application::users::memory;
use crate::application::users::usecase;

use bytes::Bytes;
use warp::Filter;

// paths are matched before methods so an unmatched path falls through to the
// router's 404 instead of a method rejection
pub fn users_server(
    user_datastore: memory::Memory,
) -> warp::filters::BoxedFilter<(impl warp::reply::Reply,)> {
    let list_users_path = with_users_gateway(user_datastore.clone())
        .and(warp::path!("api" / "users"))
        .and(warp::get())
        .and_then(list_users)
        .with(cors::cors_filter(vec!["GET"]))
        .boxed();

    let user_details_path = with_users_gateway(user_datastore.clone())
        .and(warp::path!("api" / "users" / String))
        .and(warp::get())
        .and_then(user_details)
        .with(cors::cors_filter(vec!["GET"]))
        .boxed();

    let create_user_path = with_users_gateway(user_datastore)
        .and(warp::path!("api" / "users"))
        .and(warp::post())
        .and(warp::filters::body::bytes())
        .and_then(create_user)
        .with(cors::cors_filter(vec!["POST"]))
        .boxed();

    list_users_path
        .or(user_details_path)
        .or(create_user_path)
        .boxed()
}

fn with_users_gateway(
    user_datastore: memory::Memory,
) -> warp::filters::BoxedFilter<(gateway::Gateway,)> {
    let usecase = usecase::Usecase::new(user_datastore);
    let gateway = gateway::Gateway::new(usecase);

    warp::any().map(move || gateway.clone()).boxed()
}

async fn list_users(
    users_gateway: gateway::Gateway,
) -> Result<Box<dyn warp::Reply>, warp::Rejection> {
    Ok(users_gateway.list_users().await)
}

async fn user_details(
    users_gateway: gateway::Gateway,
    user_id: String,
) -> Result<Box<dyn warp::Reply>, warp::Rejection> {
    Ok(users_gateway.user_details(&user_id).await)
}

async fn create_user(
    users_gateway: gateway::Gateway,
    payload: Bytes,
) -> Result<Box<dyn warp::Reply>, warp::Rejection> {
    Ok(users_gateway.create_user(payload).await)
}
