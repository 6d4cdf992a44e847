use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    meetmii::app::startup::startup().await
}
