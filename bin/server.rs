// Party Intake - Greeting Server
// A single static response on every path, nothing else

use axum::Router;
use tower_http::cors::CorsLayer;

const GREETING: &str = "Hello! party-intake is up and running.";

async fn greet() -> &'static str {
    GREETING
}

#[tokio::main]
async fn main() {
    println!("🌐 Party Intake - Greeting Server v{}", party_intake::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // Every path gets the same greeting
    let app = Router::new().fallback(greet).layer(CorsLayer::permissive());

    let addr = "0.0.0.0:8080";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    println!("\n🚀 Server running on http://localhost:8080");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
