//! HTML page handlers.
//!
//! | Method | Path | Page |
//! |--------|------|------|
//! | `GET` | `/`, `/home` | Landing page |
//! | `GET` | `/history` | Timeline, actors, debate, conclusion, sources, ask form |
//! | `POST` | `/history/ask` | History page re-rendered with the answer |
//! | `GET` | `/map` | Filtered event map |
//! | `GET` | `/login`, `/register` | Account placeholders |
//! | `GET` | `/dashboard`, `/admin` | Redirect to `/admin/dashboard` |
//! | `GET` | `/admin/dashboard` | Dashboard inside the admin layout |
//! | any | anything else | Not-found page (404) |

use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use minijinja::context;
use serde::{Deserialize, Serialize};
use timeline_chat::ChatError;
use timeline_core::{MapQuery, filter_events, summarize};
use timeline_types::{
    ActorTag, EventRecord, Importance, TimelineEntry, Topic, YEAR_MAX, YEAR_MIN,
};
use tracing::debug;

use crate::error::SiteError;
use crate::state::AppState;
use crate::templates::script_json;

/// Where the admin redirects land.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

// ---------------------------------------------------------------------------
// View models
// ---------------------------------------------------------------------------

/// An actor tag with its presentation attributes.
#[derive(Debug, Serialize)]
struct TagView {
    tag: &'static str,
    label: &'static str,
    color: &'static str,
    checked: bool,
}

impl TagView {
    const fn new(actor: ActorTag, checked: bool) -> Self {
        Self {
            tag: actor.as_str(),
            label: actor.label(),
            color: actor.color(),
            checked,
        }
    }
}

/// A topic option for the map filter.
#[derive(Debug, Serialize)]
struct TopicView {
    value: &'static str,
    label: &'static str,
}

/// An event as the map page shows it, both in the list and as a marker.
#[derive(Debug, Serialize)]
struct EventView<'a> {
    id: &'a str,
    title: &'a str,
    year: i32,
    summary: &'a str,
    topic_label: &'static str,
    topic_color: &'static str,
    actors: Vec<TagView>,
    source_url: Option<&'a str>,
    importance: Importance,
    latitude: f64,
    longitude: f64,
    /// Marker colour, taken from the primary actor.
    color: &'static str,
}

impl<'a> From<&'a EventRecord> for EventView<'a> {
    fn from(event: &'a EventRecord) -> Self {
        Self {
            id: &event.id,
            title: &event.title,
            year: event.year,
            summary: &event.summary,
            topic_label: event.topic.label(),
            topic_color: event.topic.color(),
            actors: event
                .actor_tags
                .iter()
                .map(|a| TagView::new(*a, true))
                .collect(),
            source_url: event.source_url.as_deref(),
            importance: event.importance,
            latitude: event.coordinate.latitude,
            longitude: event.coordinate.longitude,
            color: event
                .primary_actor()
                .map_or("#64748b", ActorTag::color),
        }
    }
}

/// A history timeline entry with its span already formatted.
#[derive(Debug, Serialize)]
struct TimelineView<'a> {
    id: &'a str,
    years: String,
    title: &'a str,
    description: &'a str,
    details: &'a [String],
}

impl<'a> From<&'a TimelineEntry> for TimelineView<'a> {
    fn from(entry: &'a TimelineEntry) -> Self {
        Self {
            id: &entry.id,
            years: entry.span.to_string(),
            title: &entry.title,
            description: &entry.description,
            details: &entry.details,
        }
    }
}

/// A dashboard statistic card.
#[derive(Debug, Serialize)]
struct StatView {
    title: &'static str,
    value: String,
    suffix: &'static str,
}

/// Body of the ask form.
#[derive(Debug, Default, Deserialize)]
pub struct AskForm {
    /// The visitor's question.
    #[serde(default)]
    pub question: String,
}

// ---------------------------------------------------------------------------
// Main layout pages
// ---------------------------------------------------------------------------

/// Landing page.
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    let html = state.templates.render(
        "home.html",
        context! {
            active => "home",
            event_count => state.catalog.len(),
            timeline_count => state.history.timeline.len(),
            actor_count => ActorTag::ALL.len(),
        },
    )?;
    Ok(Html(html))
}

/// History page with an empty ask form.
pub async fn history(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    render_history(&state, "", None, None)
}

/// Submit a question from the history page.
///
/// Chat failures are shown inline under the form; the page itself always
/// renders. A blank question re-renders the page unchanged.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AskForm>,
) -> Result<Html<String>, SiteError> {
    match state.gateway.ask(&form.question, state.preamble()).await {
        Ok(answer) => render_history(&state, &form.question, Some(&answer), None),
        Err(ChatError::EmptyQuestion) => render_history(&state, "", None, None),
        Err(e) => render_history(&state, &form.question, None, Some(&e.user_message())),
    }
}

fn render_history(
    state: &AppState,
    question: &str,
    answer: Option<&str>,
    error: Option<&str>,
) -> Result<Html<String>, SiteError> {
    let timeline: Vec<TimelineView<'_>> =
        state.history.timeline.iter().map(TimelineView::from).collect();
    let html = state.templates.render(
        "history.html",
        context! {
            active => "history",
            history => &state.history,
            timeline => timeline,
            question => question,
            answer => answer,
            error => error,
        },
    )?;
    Ok(Html(html))
}

/// Map page. Unknown topics are treated as `all`.
pub async fn map(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MapQuery>,
) -> Result<Html<String>, SiteError> {
    let criteria = query.to_criteria_lenient();
    let shown = filter_events(state.catalog.events(), &criteria);
    let summary = summarize(state.catalog.len(), shown.len(), &criteria);

    debug!(
        max_year = criteria.max_year,
        actors = criteria.allowed_actors.len(),
        topic = criteria.topic.map(Topic::as_str),
        shown = summary.shown,
        "map filtered"
    );

    let events: Vec<EventView<'_>> = shown.iter().copied().map(EventView::from).collect();
    let actors: Vec<TagView> = ActorTag::ALL
        .into_iter()
        .map(|a| TagView::new(a, criteria.allowed_actors.contains(&a)))
        .collect();
    let actors_param = criteria
        .allowed_actors
        .iter()
        .copied()
        .map(ActorTag::as_str)
        .collect::<Vec<_>>()
        .join(",");
    let topics: Vec<TopicView> = Topic::ALL
        .into_iter()
        .map(|t| TopicView {
            value: t.as_str(),
            label: t.label(),
        })
        .collect();

    let html = state.templates.render(
        "map.html",
        context! {
            active => "map",
            year => criteria.max_year,
            year_min => YEAR_MIN,
            year_max => YEAR_MAX,
            actors => actors,
            actors_param => actors_param,
            topic => criteria.topic.map(Topic::as_str),
            topics => topics,
            summary => summary,
            events => &events,
            overlays => &state.overlays,
            markers_json => script_json(&events)?,
            overlays_json => script_json(&state.overlays)?,
        },
    )?;
    Ok(Html(html))
}

/// Login placeholder.
pub async fn login(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    let html = state
        .templates
        .render("login.html", context! { active => "login" })?;
    Ok(Html(html))
}

/// Registration placeholder.
pub async fn register(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    let html = state
        .templates
        .render("register.html", context! { active => "login" })?;
    Ok(Html(html))
}

// ---------------------------------------------------------------------------
// Admin
// ---------------------------------------------------------------------------

/// `/dashboard` and `/admin` both land on the nested dashboard.
pub async fn to_dashboard() -> Redirect {
    Redirect::temporary(DASHBOARD_PATH)
}

/// Dashboard inside the admin layout.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Html<String>, SiteError> {
    let stats = [
        StatView {
            title: "Mốc sự kiện",
            value: state.catalog.len().to_string(),
            suffix: "mốc",
        },
        StatView {
            title: "Tác nhân",
            value: state.catalog.actors().len().to_string(),
            suffix: "bên",
        },
        StatView {
            title: "Giai đoạn",
            value: state.catalog.year_range().map_or_else(
                || format!("{YEAR_MIN}–{YEAR_MAX}"),
                |(first, last)| format!("{first}–{last}"),
            ),
            suffix: "",
        },
        StatView {
            title: "Bản đồ",
            value: String::from("1"),
            suffix: "trang",
        },
    ];
    let html = state.templates.render(
        "dashboard.html",
        context! { active => "dashboard", stats => stats },
    )?;
    Ok(Html(html))
}

// ---------------------------------------------------------------------------
// Fallback
// ---------------------------------------------------------------------------

/// Not-found page for every unmatched path.
pub async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> Response {
    debug!(path = uri.path(), "no route");
    match state
        .templates
        .render("not_found.html", context! { path => uri.path() })
    {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(e) => e.into_response(),
    }
}
