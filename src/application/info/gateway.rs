use super::entity;

#[derive(Clone)]
pub struct Gateway {}

impl Gateway {
    pub fn new() -> Gateway {
        Gateway {}
    }

    pub async fn api_info(&self) -> Box<dyn warp::Reply> {
        let info = entity::ApiInfo {
            message: "Rust + Warp + Tokio".to_string(),
            status: "✅ Running".to_string(),
            features: vec![
                "Rust 2021".to_string(),
                "Warp web framework".to_string(),
                "Tokio async runtime".to_string(),
                "Serde JSON codecs".to_string(),
                "In-memory user store".to_string(),
            ],
        };

        Box::new(warp::reply::json(&info))
    }
}
