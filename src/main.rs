use clap::{Parser, Subcommand};
use ipay88_opsg::config::{ENV_MERCHANT_CODE, ENV_MERCHANT_KEY, ENV_TIMEOUT_SECS, SharedSecret};
use ipay88_opsg::domain::mapping::{TransportMapping, fields};
use ipay88_opsg::infrastructure::tracing_sink::TracingEventSink;
use ipay88_opsg::interfaces::json::parameters_reader::ParametersReader;
use ipay88_opsg::interfaces::json::report_writer::ReportWriter;
use ipay88_opsg::{GatewayClient, GatewayConfig, GatewayError, Message, MessageKind};
use miette::{IntoDiagnostic, Result};
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seller identifier issued by the gateway
    #[arg(long, env = ENV_MERCHANT_CODE)]
    merchant_code: Option<String>,

    /// Shared secret issued by the gateway
    #[arg(long, env = ENV_MERCHANT_KEY, hide_env_values = true)]
    merchant_key: Option<String>,

    /// Transport timeout in seconds
    #[arg(long, env = ENV_TIMEOUT_SECS, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build and sign a payment request from a JSON object of wire fields
    Sign {
        /// JSON file with the request parameters
        params: PathBuf,
    },
    /// Validate a url-encoded payment notification body
    Verify {
        /// File holding the raw notification body
        body: PathBuf,
    },
    /// Query the status of a payment
    Status {
        #[arg(long)]
        ref_no: String,

        /// Payment amount, e.g. "1,000.00"
        #[arg(long)]
        amount: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = GatewayConfig {
        seller_identifier: cli.merchant_code,
        shared_secret: cli.merchant_key.map(SharedSecret::new),
        request_timeout: Duration::from_secs(cli.timeout_secs),
    };
    let client = GatewayClient::new(config).with_event_sink(Box::new(TracingEventSink::new()));

    let message = match cli.command {
        Command::Sign { params } => {
            let file = File::open(params).into_diagnostic()?;
            let parameters = ParametersReader::new(file).parameters().into_diagnostic()?;
            client
                .create_payment_request(&parameters, false)
                .into_diagnostic()?
        }
        Command::Verify { body } => {
            let body = fs::read_to_string(body).into_diagnostic()?;
            let parameters = TransportMapping::from_form_body(&body)
                .ok_or_else(|| {
                    GatewayError::InvalidParameters(
                        "the body is not a url-encoded form of gateway fields".to_string(),
                    )
                })
                .into_diagnostic()?;
            client
                .create_payment_notify_response(&parameters, None, false)
                .into_diagnostic()?
        }
        Command::Status { ref_no, amount } => {
            let parameters: TransportMapping =
                [(fields::REF_NO, ref_no), (fields::AMOUNT, amount)].into_iter().collect();
            client
                .with_default_transport()
                .into_diagnostic()?
                .send(MessageKind::PaymentStatusRequest, &parameters, false)
                .await
                .into_diagnostic()?
        }
    };

    let stdout = io::stdout();
    let mut writer = ReportWriter::new(stdout.lock());
    writer.write_message(&message).into_diagnostic()?;

    Ok(exit_code(&message))
}

fn exit_code(message: &Message) -> ExitCode {
    if message.has_violations() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
