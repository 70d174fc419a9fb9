#[tokio::main]
async fn main() -> std::io::Result<()> {
    game_client::run().await
}
