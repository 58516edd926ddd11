#[actix_web::main]
async fn main() {
    if let Err(err) = buildez_mcp::run().await {
        log::error!("fatal error: {err:#}");
        std::process::exit(1);
    }
}
