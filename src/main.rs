use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    gembot::run().await
}
