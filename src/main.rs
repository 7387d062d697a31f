// src/main.rs
use anyhow::Context;
use log::info;
use sketchy_prompt::example;
use sketchy_prompt::services::{DEFAULT_OUTPUT, SCHEMA_URL, export};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Exporting prompt document with schema {}", SCHEMA_URL);

    let document = example::smoothie_prompt();
    export(&document, ".")
        .await
        .with_context(|| format!("Failed to export {DEFAULT_OUTPUT}"))?;

    Ok(())
}
