//! Plain-text rendering of the catalog state.

use holocron_domain::{CatalogState, CharacterDetails, Homeworld, Record, SpeciesKind};

const UNKNOWN: &str = "unknown";
const RESET: &str = "\x1b[0m";

/// Renders the current result page with its status lines.
#[must_use]
pub fn render_page(state: &CatalogState) -> String {
    let query = state.query();
    let results = state.results();

    let mut out = format!(
        "Page {} of {} · {} characters",
        query.page(),
        results.page_count(),
        results.total_count()
    );
    if !query.search_text().is_empty() {
        out.push_str(&format!(" · search \"{}\"", query.search_text()));
    }
    if !query.species_filter().is_empty() {
        out.push_str(&format!(" · species \"{}\"", query.species_filter()));
    }
    out.push('\n');

    if results.is_empty() {
        out.push_str("  (no characters)\n");
    }
    for (index, record) in results.items().iter().enumerate() {
        out.push_str(&card_line(index + 1, record, state.is_favorite(record)));
        out.push('\n');
    }

    if state.is_loading() {
        out.push_str("loading…\n");
    }
    if let Some(error) = state.error() {
        out.push_str(&format!("! {error} (type `retry`)\n"));
    }
    out
}

fn card_line(number: usize, record: &Record, favorite: bool) -> String {
    let hue = SpeciesKind::for_record(record).palette().hue;
    format!(
        "{number:>3}. {} \x1b[{}m{}{RESET}  {} · {}",
        if favorite { '★' } else { ' ' },
        hue.ansi_code(),
        record.name().unwrap_or(UNKNOWN),
        record.gender().unwrap_or(UNKNOWN),
        record.birth_year().unwrap_or(UNKNOWN),
    )
}

/// Renders the details view.
#[must_use]
pub fn render_details(details: &CharacterDetails) -> String {
    let record = &details.record;
    let mut lines = vec![
        record.name().unwrap_or(UNKNOWN).to_string(),
        format!(
            "  {} • {}",
            record.birth_year().unwrap_or(UNKNOWN),
            record.gender().unwrap_or(UNKNOWN)
        ),
        format!("  Height: {} cm", record.height().unwrap_or(UNKNOWN)),
        format!("  Mass: {} kg", record.mass().unwrap_or(UNKNOWN)),
        format!("  Number of Films: {}", record.film_count()),
    ];
    if let Some(created) = record.created_display() {
        lines.push(format!("  Date Added: {created}"));
    }

    if details.loading {
        lines.push("  loading homeworld…".to_string());
    } else if let Some(homeworld) = &details.homeworld {
        lines.extend(homeworld_lines(homeworld));
    }

    if let Some(url) = record.url() {
        lines.push(format!("  {url}"));
    }
    lines.join("\n") + "\n"
}

fn homeworld_lines(homeworld: &Homeworld) -> [String; 4] {
    let field = |value: &Option<String>| value.as_deref().unwrap_or(UNKNOWN).to_string();
    [
        format!("  HomeWorld Name: {}", field(&homeworld.name)),
        format!("  HomeWorld Terrain: {}", field(&homeworld.terrain)),
        format!("  HomeWorld Climate: {}", field(&homeworld.climate)),
        format!("  HomeWorld Population: {}", field(&homeworld.population)),
    ]
}

/// Renders the favorite identifiers, sorted.
#[must_use]
pub fn render_favorites(state: &CatalogState) -> String {
    if state.favorites().is_empty() {
        return "no favorites yet\n".to_string();
    }
    let mut ids: Vec<_> = state.favorites().iter().collect();
    ids.sort();
    ids.iter().map(|id| format!("  ★ {id}\n")).collect()
}

/// Renders the species filter options.
#[must_use]
pub fn render_species_options(state: &CatalogState) -> String {
    if state.species_options().is_empty() {
        return "no species options available\n".to_string();
    }
    state.species_options().join(", ") + "\n"
}
