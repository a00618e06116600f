//! Interactive console demo for the phone entry form.
//!
//! Wires the default collaborators together and maps stdin commands to
//! controller operations, printing every outbound signal as JSON.
//!
//! Commands: `cc <text>`, `ph <text>`, `pick`, `choose <ISO> <code>`,
//! `send`, `state`, `quit`.

use anyhow::Result;
use async_trait::async_trait;
use phone_entry_form::{
    AuthModel, AuthResult, Country, FormConfig, FormController, FormSignal, MetadataPhoneUtil,
    SignalSink, StaticResources,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Prints every signal as one JSON line.
struct PrintSink;

impl SignalSink for PrintSink {
    fn emit(&self, signal: FormSignal) {
        match serde_json::to_string(&signal) {
            Ok(json) => println!("signal {}", json),
            Err(e) => error!("failed to serialize signal: {}", e),
        }
    }
}

/// Pretends to talk to a verification backend.
struct DemoAuthModel;

#[async_trait]
impl AuthModel for DemoAuthModel {
    async fn send_phone(&self, phone: &str) -> AuthResult<()> {
        info!(phone, "demo backend accepting phone");
        tokio::time::sleep(Duration::from_millis(300)).await;
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match FormConfig::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut controller = FormController::new(
        config,
        Arc::new(MetadataPhoneUtil::new()),
        Arc::new(StaticResources::new()),
        Arc::new(DemoAuthModel),
        Arc::new(PrintSink),
    );
    controller.bootstrap();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "cc" => controller.country_code_edited(rest),
            "ph" => controller.phone_number_edited(rest),
            "pick" => controller.country_picker_requested(),
            "choose" => match rest.split_once(' ') {
                Some((iso, code)) => match code.trim_start_matches('+').parse::<u32>() {
                    Ok(code) => controller.country_chosen(Country::new(iso, code)),
                    Err(_) => eprintln!("usage: choose <ISO> <calling code>"),
                },
                None => eprintln!("usage: choose <ISO> <calling code>"),
            },
            "send" => controller.submit().await,
            "state" => {
                let state = controller.state();
                println!(
                    "country_code={:?} phone={:?} country={} send_enabled={} in_progress={}",
                    state.country_code_text(),
                    state.phone_number_text(),
                    state.detected_country(),
                    state.send_enabled(),
                    state.in_progress()
                );
            }
            "quit" | "exit" => break,
            "" => {}
            other => eprintln!("unknown command: {}", other),
        }
    }

    info!("demo shutting down");
    Ok(())
}
