#[tokio::main]
async fn main() {
    if let Err(e) = cookbook::run().await {
        eprintln!("Fatal: {}", e);
        std::process::exit(1);
    }
}
