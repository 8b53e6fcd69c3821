#[tokio::main]
async fn main() -> std::io::Result<()> {
    weapp_session::run_with_config().await
}
