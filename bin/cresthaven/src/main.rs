use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    cresthaven::run().await
}
