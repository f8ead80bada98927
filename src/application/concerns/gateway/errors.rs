use http::StatusCode;
use serde::{Deserialize, Serialize};

// every handler failure shares one wire shape
#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorReply {
    pub error: String,
}

pub fn error_reply(message: String, status_code: StatusCode) -> Box<dyn warp::Reply> {
    let json = Box::new(warp::reply::json(&ErrorReply { error: message }));

    Box::new(warp::reply::with_status(json, status_code))
}
