use recruitment_client::config::Config;
use recruitment_client::routing::guards::{guard_navigation, Guard};
use recruitment_client::AppState;
use tracing::info;

/// Diagnostic shell: restores the persisted session, runs the guard for the
/// root route and pulls the vacancy list if a session exists. Useful for
/// smoke-testing a deployment without the web UI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    info!(base_url = %config.api_base_url, "starting recruitment client");

    let app = AppState::new(&config)?;
    let user = app.store.current_user();

    match guard_navigation(app.storage.as_ref(), user.as_ref(), "/") {
        Guard::Allow => {}
        Guard::Redirect(path) => app.navigator.navigate(&path),
    }

    match user {
        None => {
            info!("no persisted session, landing on /login");
        }
        Some(user) => {
            info!(user_id = user.id, role = user.role.as_str(), name = %user.name, "session restored");
            let result = app.store.fetch_vacancies().await;
            if result.success {
                let count = result.data.map(|v| v.len()).unwrap_or(0);
                info!(count, "vacancy list fetched");
            } else {
                info!(error = ?result.error, "vacancy fetch failed");
            }
        }
    }

    Ok(())
}
