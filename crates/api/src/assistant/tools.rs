//! Tool implementations: read-only queries rendered as plain text.

use confera_db::models::conference::Conference;
use confera_db::repositories::{ConferenceRepo, SessionRepo};
use confera_db::DbPool;

use super::ToolError;

/// Outcome of resolving a conference by a user-supplied name fragment.
enum NameMatch {
    None,
    One(Conference),
    Multiple,
}

async fn resolve_by_name(pool: &DbPool, name: &str) -> Result<NameMatch, ToolError> {
    let mut matches = ConferenceRepo::find_by_title_fragment(pool, name).await?;
    Ok(match matches.len() {
        0 => NameMatch::None,
        1 => NameMatch::One(matches.remove(0)),
        _ => NameMatch::Multiple,
    })
}

/// Return all conferences with their date range.
pub async fn list_conferences(pool: &DbPool) -> Result<String, ToolError> {
    let conferences = ConferenceRepo::list_all(pool).await?;
    if conferences.is_empty() {
        return Ok("No conferences found.".to_string());
    }

    Ok(conferences
        .iter()
        .map(|c| format!("• {} ({} → {})", c.title, c.start_date, c.end_date))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Return details about a conference matched by name.
pub async fn get_conference_details(pool: &DbPool, name: &str) -> Result<String, ToolError> {
    match resolve_by_name(pool, name).await? {
        NameMatch::None => Ok(format!("No conference found named '{name}'.")),
        NameMatch::Multiple => Ok(format!(
            "Multiple conferences found for '{name}', refine your search."
        )),
        NameMatch::One(c) => Ok(format!(
            "{}\nTheme: {}\nLocation: {}\nDates: {} → {}\nDescription: {}",
            c.title,
            c.theme.display_name(),
            c.location,
            c.start_date,
            c.end_date,
            c.description
        )),
    }
}

/// List all sessions for a conference matched by name.
pub async fn list_sessions(pool: &DbPool, conference_name: &str) -> Result<String, ToolError> {
    let conference = match resolve_by_name(pool, conference_name).await? {
        NameMatch::None => return Ok(format!("No conference '{conference_name}' found.")),
        NameMatch::Multiple => {
            return Ok(format!(
                "More than one conference matches '{conference_name}'."
            ))
        }
        NameMatch::One(c) => c,
    };

    let sessions = SessionRepo::list_for_conference(pool, conference.id).await?;
    if sessions.is_empty() {
        return Ok(format!("No sessions found for {}.", conference.title));
    }

    Ok(sessions
        .iter()
        .map(|s| {
            format!(
                "• {} ({}–{}) – {}\n  Topic: {}",
                s.title, s.start_time, s.end_time, s.room, s.topic
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Filter conferences by theme, loosely: the query is matched against the
/// theme display names case-insensitively after accent stripping.
pub async fn filter_by_theme(pool: &DbPool, theme: &str) -> Result<String, ToolError> {
    let conferences = ConferenceRepo::list_all(pool).await?;
    let wanted = normalize(theme);

    let matches: Vec<&Conference> = conferences
        .iter()
        .filter(|c| normalize(c.theme.display_name()).contains(&wanted))
        .collect();

    if wanted.is_empty() || matches.is_empty() {
        return Ok(format!("No conferences found with theme '{theme}'."));
    }

    Ok(matches
        .iter()
        .map(|c| {
            format!(
                "• {} ({} → {}) — {}",
                c.title,
                c.start_date,
                c.end_date,
                c.theme.display_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Lowercase, strip accents from the Latin-1 range, and drop everything
/// but ASCII alphanumerics and spaces.
fn normalize(text: &str) -> String {
    text.chars()
        .flat_map(|c| c.to_lowercase())
        .map(|c| match c {
            'à'..='å' => 'a',
            'è'..='ë' => 'e',
            'ì'..='ï' => 'i',
            'ò'..='ö' => 'o',
            'ù'..='ü' => 'u',
            'ç' => 'c',
            'ñ' => 'n',
            other => other,
        })
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect()
}
