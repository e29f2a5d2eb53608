#[tokio::main]
async fn main() {
    lexp_server::start_server().await;
}
