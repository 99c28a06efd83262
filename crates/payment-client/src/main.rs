use std::time::Duration;

use payment_client::cli::{CliError, CliOptions};
use payment_client::{ClientConfig, PaymentClient, PaymentRequest};
use request_auth::RequestSigner;
use request_auth::config::load_dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(CliError::HelpRequested) => {
            print_usage();
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    if let Err(err) = load_dotenv() {
        eprintln!("{err}");
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "payment_client=info,request_auth=info".to_string()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "failed to load payment client config");
            std::process::exit(1);
        }
    };

    let http_client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
    {
        Ok(http_client) => http_client,
        Err(err) => {
            error!(error = %err, "failed to initialize payment http client");
            std::process::exit(1);
        }
    };

    let client = PaymentClient::new(
        config.endpoint,
        RequestSigner::new(config.shared_secret),
        http_client,
    );
    let payment = PaymentRequest {
        amount: options.amount,
        currency: options.currency,
    };

    info!(
        endpoint = %client.endpoint(),
        amount = payment.amount,
        currency = %payment.currency,
        "sending signed payment request"
    );

    match client.send_payment(&payment).await {
        Ok(response) => {
            println!("Status Code: {}", response.status);
            println!("{}", response.body);
        }
        Err(err) => {
            error!(error = %err, "payment request failed");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Usage: cargo run -p payment-client -- [--amount <u64>] [--currency <code>]\n\
         \n\
         Environment:\n\
         - API_ENDPOINT   full URL of the payment endpoint (required)\n\
         - MY_SECRET_KEY  shared HMAC secret (required)\n\
         - PAYMENT_CLIENT_TIMEOUT_SECONDS  request timeout (default 15)\n\
         \n\
         Options:\n\
         - --amount    payment amount (default 5000)\n\
         - --currency  currency code (default JPY)\n\
         - --help      Show this help text"
    );
}
