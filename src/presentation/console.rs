use crate::application::search_bar::SearchBar;
use crate::domain::api::SearchBackend;
use crate::domain::models::SearchHit;
use std::fmt::Write;

pub const MSG_NO_RESULTS: &str = "Aucun résultat trouvé pour votre recherche.";
pub const MSG_SEARCHING: &str = "Recherche...";

/// Renders the search bar state: the error line wins, then the empty-list
/// message, otherwise the result list.
pub fn render<B: SearchBackend>(bar: &SearchBar<B>) -> String {
    if let Some(error) = bar.error() {
        return error.to_string();
    }
    if bar.is_loading() {
        return MSG_SEARCHING.to_string();
    }
    if bar.results().is_empty() {
        return MSG_NO_RESULTS.to_string();
    }

    let mut out = String::new();
    for hit in bar.results() {
        render_hit(&mut out, hit);
    }
    out
}

fn render_hit(out: &mut String, hit: &SearchHit) {
    let document = &hit.document;
    if !document.category.is_empty() {
        let _ = writeln!(out, "[{}]", document.category);
    }
    let _ = writeln!(out, "{}", document.title);
    if !document.content.is_empty() {
        let _ = writeln!(out, "  {}", document.content);
    }
    if !document.url.is_empty() {
        let _ = writeln!(out, "  {}", document.url);
    }
    let _ = writeln!(out);
}
