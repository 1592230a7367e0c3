use reqwest::Client;
use serde_json::{json, Value};
use sqlx::SqlitePool;

/// A server running in-process on an ephemeral port, backed by an in-memory database.
pub struct TestServer {
    pub base_url: String,
    pub pool: SqlitePool,
}

impl TestServer {
    /// Build a URL for an API endpoint.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn spawn_server() -> TestServer {
    let pool = server::db::pool::create_pool("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database");
    server::db::pool::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let app = server::routes::router(pool.clone(), server::state::new_session_slot());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestServer {
        base_url: format!("http://{addr}"),
        pool,
    }
}

/// Build a reqwest client for tests.
pub fn client() -> Client {
    Client::new()
}

/// Start a game with alice as White and bob as Black.
pub async fn start_default_game(client: &Client, server: &TestServer) -> reqwest::Response {
    start_game(client, server, "alice", "bob", "white", "black").await
}

pub async fn start_game(
    client: &Client,
    server: &TestServer,
    player1: &str,
    player2: &str,
    player1_color: &str,
    player2_color: &str,
) -> reqwest::Response {
    client
        .post(server.url("/api/game/start"))
        .json(&json!({
            "player1": player1,
            "player2": player2,
            "player1Color": player1_color,
            "player2Color": player2_color,
        }))
        .send()
        .await
        .expect("Failed to send start request")
}

pub async fn make_move(
    client: &Client,
    server: &TestServer,
    player: &str,
    from: &str,
    to: &str,
) -> reqwest::Response {
    try_make_move(client, server, player, from, to)
        .await
        .expect("Failed to send move request")
}

/// Like `make_move`, but hands back transport errors such as timeouts.
pub async fn try_make_move(
    client: &Client,
    server: &TestServer,
    player: &str,
    from: &str,
    to: &str,
) -> reqwest::Result<reqwest::Response> {
    client
        .post(server.url("/api/game/move"))
        .json(&json!({ "player": player, "from": from, "to": to }))
        .send()
        .await
}

pub async fn get_json(client: &Client, server: &TestServer, path: &str) -> (u16, Value) {
    let resp = client
        .get(server.url(path))
        .send()
        .await
        .expect("Failed to send GET request");
    let status = resp.status().as_u16();
    let body: Value = resp.json().await.unwrap();
    (status, body)
}
