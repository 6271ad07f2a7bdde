#[actix_rt::main]
async fn main() -> std::io::Result<()> {
    newsdesk::run().await
}
