//! CLI Command Handlers
//!
//! Each handler builds a screen over the OMDb client, runs one lookup, and
//! prints the outcome. Handlers take CLI args and Output, return ExitCode.

use crate::api::{FailureKind, OmdbClient};
use crate::app::NO_MOVIES_FOUND;
use crate::cli::{ExitCode, InfoCmd, Output, SearchCmd};
use crate::config::Config;
use crate::models::{MovieDetail, PlotLength, SearchRequest, SearchResultSummary};
use crate::screen::MovieScreen;

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, config: &Config, output: &Output) -> ExitCode {
    let mut request = SearchRequest::new(cmd.query.as_str()).page(cmd.page);
    if let Some(year) = cmd.year {
        request = request.year(year);
    }
    if let Some(filter) = cmd.media_type {
        request = request.media_type(filter.into());
    }

    let Some(query) = request.trimmed_query() else {
        return output.error("Search query is empty", ExitCode::InvalidArgs);
    };
    output.info(format!("Searching for: {}", query));

    let client = OmdbClient::new(&config.omdb());
    let mut screen = MovieScreen::new(client, output);

    match screen.search_with(request).await {
        Ok(results) if results.is_empty() => {
            // The screen already surfaced the notice in human mode
            if output.json {
                output.error(NO_MOVIES_FOUND, ExitCode::NotFound)
            } else {
                ExitCode::NotFound
            }
        }
        Ok(mut results) => {
            let total = screen.app().total_results();
            results.truncate(cmd.limit);

            let mut lines: Vec<String> = results.iter().map(summary_line).collect();
            if total as usize > results.len() {
                lines.push(format!("({} of {} results)", results.len(), total));
            }

            if let Err(e) = output.print_or(&results, &lines) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => output.error(format!("Search failed: {}", e), ExitCode::NetworkError),
    }
}

fn summary_line(result: &SearchResultSummary) -> String {
    format!(
        "{:<11} {} ({}) [{}]",
        result.imdb_id, result.title, result.year, result.media_type
    )
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(cmd: InfoCmd, config: &Config, output: &Output) -> ExitCode {
    let plot = cmd.plot.map(PlotLength::from).unwrap_or_else(|| config.plot());

    output.info(format!("Getting info for: {}", cmd.imdb_id));

    let client = OmdbClient::new(&config.omdb());
    let mut screen = MovieScreen::new(client, output).with_plot(plot);

    match screen.select_result(&cmd.imdb_id).await {
        Ok(detail) => {
            if let Err(e) = output.print_or(&detail, &detail_lines(&detail)) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => {
            let code = match e.kind() {
                FailureKind::UpstreamNegative => ExitCode::NotFound,
                FailureKind::TransportFailure => ExitCode::NetworkError,
            };
            output.error(format!("Info failed: {}", e), code)
        }
    }
}

/// Human-readable rendering of a detail record
pub fn detail_lines(detail: &MovieDetail) -> Vec<String> {
    let mut lines = vec![
        format!("{} ({})", detail.title, detail.year),
        format!("Rating: {} ({} votes)", detail.imdb_rating, detail.imdb_votes),
    ];

    let fields = [
        ("Rated", detail.rated.as_str()),
        ("Released", detail.released.as_str()),
        ("Runtime", detail.runtime.as_str()),
        ("Genre", detail.genre.as_str()),
        ("Director", detail.director.as_str()),
        ("Writer", detail.writer.as_str()),
        ("Actors", detail.actors.as_str()),
        ("Language", detail.language.as_str()),
        ("Country", detail.country.as_str()),
        ("Awards", detail.awards.as_str()),
    ];
    for (label, value) in fields {
        if !value.is_empty() {
            lines.push(format!("{}: {}", label, value));
        }
    }

    for rating in &detail.ratings {
        lines.push(format!("  {}", rating));
    }

    lines.push(String::new());
    lines.push(detail.plot.clone());
    lines.push(String::new());
    lines.push(format!(
        "Poster: {}",
        detail.poster.as_deref().unwrap_or("no poster")
    ));
    lines
}
