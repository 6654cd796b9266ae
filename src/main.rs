use anyhow::Result;
use search_portal_client::application::search_bar::SearchBar;
use search_portal_client::data::http_backend::HttpSearchBackend;
use search_portal_client::infrastructure::config::Config;
use search_portal_client::infrastructure::logging::init_logging;
use search_portal_client::presentation::console;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging();
    info!("Logging initialized");

    let config = Config::from_env();
    info!(backend_url = %config.backend_url, "Configuration loaded");

    let backend = Arc::new(HttpSearchBackend::new(&config.backend_url)?);
    let mut search_bar = SearchBar::new(backend);
    info!("Search client ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("Recherche (ligne vide pour quitter)");

    loop {
        print!("recherche> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            break;
        }

        search_bar.set_query(query);
        search_bar.submit().await;
        println!("{}", console::render(&search_bar));
    }

    info!("Exiting");
    Ok(())
}
