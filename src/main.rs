use clap::Parser;
use healthwise::db::Db;
use healthwise::email::ResendEmailSender;
use healthwise::predictor::HttpPredictionClient;
use healthwise::services::auth::AuthService;
use healthwise::services::prediction::PredictionService;
use healthwise::AppState;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// libSQL server address
    #[clap(env)]
    url: String,

    /// libSQL authentication token.
    #[clap(env, default_value = "")]
    auth_token: String,

    /// Base URL of the ML prediction API.
    #[arg(long, env, default_value = "http://127.0.0.1:5000")]
    predictor_url: String,

    /// Resend API key. When unset, email verification is disabled and
    /// registration logs users in directly.
    #[arg(long, env)]
    resend_api_key: Option<String>,

    /// Public base URL used in verification links.
    #[arg(long, env, default_value = "http://localhost:1414")]
    base_url: String,

    /// Mark session cookies as Secure (requires https).
    #[arg(long, env, default_value_t = false)]
    secure_cookies: bool,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,healthwise=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let db = Db::new(args.url, args.auth_token).await?;

    let email = ResendEmailSender::new(args.resend_api_key);
    let auth = AuthService::new(db.clone(), email, args.base_url);
    let predictor = HttpPredictionClient::new(args.predictor_url);
    let predictions = PredictionService::new(predictor, db.clone());

    let state = AppState {
        db,
        auth,
        predictions,
        secure_cookies: args.secure_cookies,
    };

    let router = healthwise::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    tracing::info!("listening on {address}");
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
