use anyhow::{Context, Result, bail};
use env_logger::{Builder, Env, Target};
use log::{Level, error, info};
use std::io::Write;
use wifi_settings_editor::{
    DeviceRestClient, EditSession, SessionError, SettingsEdit, WiFiSettingsClient,
    config::AppConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    initialize();

    let config = AppConfig::get();
    info!("device config: {:?}", config.device);

    let client =
        DeviceRestClient::new(&config.device).context("failed to create device client")?;

    let edit: SettingsEdit = serde_json::from_reader(std::io::stdin().lock())
        .context("failed to parse settings edit from stdin")?;

    let settings = client
        .load_settings()
        .await
        .context("failed to load wifi settings")?;
    let mut session = EditSession::new(settings);

    let network = match &edit.select_network {
        Some(ssid) => Some(
            client
                .list_networks()
                .await
                .context("failed to list networks")?
                .into_iter()
                .find(|network| network.ssid == *ssid)
                .context(format!("failed to find network {ssid}"))?,
        ),
        None => None,
    };

    edit.apply(&mut session, network)
        .context("failed to apply settings edit")?;

    match session.submit(&client).await {
        Ok(saved) => {
            info!("saved wifi settings for {}", saved.ssid);
            Ok(())
        }
        Err(SessionError::Invalid(errors)) => {
            for (field, e) in errors.iter() {
                error!("{field}: {e}");
            }
            bail!("wifi settings rejected: {errors}")
        }
        Err(e) => Err(e).context("failed to submit wifi settings"),
    }
}

fn initialize() {
    log_panics::init();

    let default_level = if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    };

    // errors go to stderr, everything else to stdout
    Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|f, record| {
            if record.level() == Level::Error {
                writeln!(std::io::stderr(), "{}", record.args())
            } else {
                writeln!(f, "[{}] {}", record.level(), record.args())
            }
        })
        .target(Target::Stdout)
        .init();

    info!("wifi-settings-editor {}", env!("CARGO_PKG_VERSION"));
}
