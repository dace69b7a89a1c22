#[tokio::main]
async fn main() -> anyhow::Result<()> {
    kanji_match_backend::run().await
}
