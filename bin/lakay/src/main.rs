#[tokio::main]
async fn main() -> eyre::Result<()> {
    lakay::run().await
}
