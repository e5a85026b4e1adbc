#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bfhl::start_server().await
}
