use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct ApiInfo {
    pub message: String,
    pub status: String,
    pub features: Vec<String>,
}
