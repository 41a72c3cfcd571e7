use server::{error::StartupError, start_server};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    start_server().await
}
