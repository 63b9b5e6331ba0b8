#[tokio::main]
async fn main() {
    symptom_checker::init_tracing();

    if let Err(e) = symptom_checker::run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
