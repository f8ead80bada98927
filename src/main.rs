mod application;
mod environment;
mod server;

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    println!("🚀 Server running on http://localhost:8080");
    println!("✅ Users API is ready for requests");

    server::serve(([0, 0, 0, 0], 8080)).await;
}
