//! Coin generation handlers.

use axum::{
    Form, Json,
    extract::{Path as UrlPath, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::compose::{CoinSpec, compose_coin, compose_emblem};
use crate::error::EscudoError;

use super::state::AppState;

/// Form data submitted by the generator UI, one field set per face.
///
/// Fragment fields carry paths relative to the assets directory; the
/// value `"none"` (or an empty string) means "omit this fragment".
#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    /// Crown for the heads face
    #[serde(rename = "crown")]
    pub heads_crown: String,
    /// Center icon for the heads face
    #[serde(rename = "icon-heads")]
    pub heads_icon: String,
    /// Laurels for the heads face
    #[serde(rename = "sides-heads")]
    pub heads_sides: String,
    /// Crown for the tails face
    #[serde(rename = "crown-tails")]
    pub tails_crown: String,
    /// Shield the tails coat of arms is built on
    #[serde(rename = "shield-tails")]
    pub tails_shield: String,
    /// Laurels for the tails face
    #[serde(rename = "sides-tails")]
    pub tails_sides: String,
    /// Quadrant icons for the coat of arms, upper-left first
    #[serde(rename = "icon-tails-1", default)]
    pub tails_icon_1: String,
    #[serde(rename = "icon-tails-2", default)]
    pub tails_icon_2: String,
    #[serde(rename = "icon-tails-3", default)]
    pub tails_icon_3: String,
    #[serde(rename = "icon-tails-4", default)]
    pub tails_icon_4: String,
    /// Left-half inscription
    #[serde(rename = "left-text", default)]
    pub left_text: String,
    /// Right-half inscription
    #[serde(rename = "right-text", default)]
    pub right_text: String,
    /// Checkbox: overlay center guide lines
    #[serde(default)]
    pub debug: Option<String>,
}

impl GenerateForm {
    fn tails_icons(&self) -> Vec<&str> {
        [
            self.tails_icon_1.as_str(),
            self.tails_icon_2.as_str(),
            self.tails_icon_3.as_str(),
            self.tails_icon_4.as_str(),
        ]
        .into_iter()
        .filter(|value| !is_none_sentinel(value))
        .collect()
    }
}

/// Both generated faces, embedded as serialized SVG strings.
#[derive(Debug, Serialize)]
pub struct GenerateResult {
    /// Request id, usable with the download endpoint
    pub id: String,
    /// Heads face markup
    pub heads: String,
    /// Tails face markup
    pub tails: String,
}

/// Handle GET / - return the generator UI.
pub async fn index() -> Html<&'static str> {
    Html(HTML_FORM)
}

/// Handle POST /generate - compose both coin faces.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Form(form): Form<GenerateForm>,
) -> Response {
    // Composition is synchronous file work, run it off the async threads
    let result = tokio::task::spawn_blocking(move || generate_faces(&state, &form)).await;

    match result {
        Ok(Ok(result)) => Json(result).into_response(),
        Ok(Err(e)) => error_response(&format!("Generation failed: {e}")),
        Err(e) => error_response(&format!("Task error: {e}")),
    }
}

/// Compose heads and tails under a fresh request id.
///
/// Output paths are derived from a UUID so concurrent requests never
/// collide; the composition core assumes distinct output paths and
/// provides no locking itself.
fn generate_faces(state: &AppState, form: &GenerateForm) -> Result<GenerateResult, EscudoError> {
    let assets = &state.config.assets_dir;
    let output = &state.config.output_dir;
    std::fs::create_dir_all(output)?;

    let id = Uuid::new_v4().to_string();
    let heads_path = output.join(format!("{id}-heads.svg"));
    let tails_path = output.join(format!("{id}-tails.svg"));
    let emblem_path = output.join(format!("{id}-emblem.svg"));

    let debug = form.debug.as_deref() == Some("on");

    // Heads always carries a single icon at its center.
    let mut heads = CoinSpec::new(fragment_path(assets, &form.heads_icon)?);
    heads.crown = optional_fragment(assets, &form.heads_crown)?;
    heads.laurels = optional_fragment(assets, &form.heads_sides)?;
    heads.left_text = form.left_text.clone();
    heads.right_text = form.right_text.clone();
    heads.debug = debug;
    compose_coin(&heads_path, &heads)?;

    // Tails always carries the coat of arms.
    let icons: Vec<PathBuf> = form
        .tails_icons()
        .into_iter()
        .map(|relative| fragment_path(assets, relative))
        .collect::<Result<_, _>>()?;
    compose_emblem(&emblem_path, &fragment_path(assets, &form.tails_shield)?, &icons)?;

    let mut tails = CoinSpec::new(&emblem_path);
    tails.crown = optional_fragment(assets, &form.tails_crown)?;
    tails.laurels = optional_fragment(assets, &form.tails_sides)?;
    tails.left_text = form.left_text.clone();
    tails.right_text = form.right_text.clone();
    tails.center_normalized = true;
    tails.debug = debug;
    compose_coin(&tails_path, &tails)?;

    Ok(GenerateResult {
        id,
        heads: std::fs::read_to_string(&heads_path)?,
        tails: std::fs::read_to_string(&tails_path)?,
    })
}

/// Handle GET /download/:id/:face - serve a previously generated face.
pub async fn download(
    State(state): State<Arc<AppState>>,
    UrlPath((id, face)): UrlPath<(String, String)>,
) -> Response {
    // Only ids we minted resolve to files; this also rules out traversal.
    if Uuid::parse_str(&id).is_err() {
        return (StatusCode::BAD_REQUEST, "invalid request id").into_response();
    }
    if face != "heads" && face != "tails" {
        return (StatusCode::BAD_REQUEST, "face must be heads or tails").into_response();
    }

    let path = state.config.output_dir.join(format!("{id}-{face}.svg"));
    match std::fs::read_to_string(&path) {
        Ok(markup) => (
            [
                (header::CONTENT_TYPE, "image/svg+xml".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"coin-{face}.svg\""),
                ),
            ],
            markup,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "no such coin face").into_response(),
    }
}

/// Handle GET /api/catalog - list the selectable fragments.
pub async fn catalog(State(state): State<Arc<AppState>>) -> Response {
    match Catalog::scan(&state.config.assets_dir) {
        Ok(catalog) => Json(catalog).into_response(),
        Err(e) => error_response(&format!("Catalog scan failed: {e}")),
    }
}

/// True for the form's "omit this fragment" values.
fn is_none_sentinel(value: &str) -> bool {
    value.is_empty() || value == "none"
}

/// Resolve a form-supplied fragment path under the assets directory,
/// rejecting anything that would escape it.
fn fragment_path(assets: &Path, relative: &str) -> Result<PathBuf, EscudoError> {
    let relative_path = Path::new(relative);
    let escapes = relative_path.is_absolute()
        || relative_path
            .components()
            .any(|component| matches!(component, Component::ParentDir));
    if escapes {
        return Err(EscudoError::FragmentLoad {
            path: relative_path.to_path_buf(),
            reason: "path escapes the assets directory".to_string(),
        });
    }
    Ok(assets.join(relative_path))
}

/// Map the optional form fields onto real paths; `"none"` means absent.
fn optional_fragment(assets: &Path, value: &str) -> Result<Option<PathBuf>, EscudoError> {
    if is_none_sentinel(value) {
        return Ok(None);
    }
    fragment_path(assets, value).map(Some)
}

/// Generate error response JSON.
fn error_response(error_msg: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "success": false, "error": error_msg })),
    )
        .into_response()
}

/// The generator UI: dropdowns fed by /api/catalog, live preview of both
/// faces on every change.
const HTML_FORM: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Escudo Coin Generator</title>
    <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }

    body {
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
        background: linear-gradient(135deg, #2c3e50 0%, #4ca1af 100%);
        min-height: 100vh;
        display: flex;
        align-items: flex-start;
        justify-content: center;
        padding: 20px;
        gap: 20px;
    }

    .panel {
        background: white;
        border-radius: 16px;
        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
        padding: 32px;
    }

    .controls { width: 360px; }

    h1 { color: #2d3748; font-size: 24px; margin-bottom: 8px; }

    .subtitle { color: #718096; font-size: 14px; margin-bottom: 24px; }

    fieldset {
        border: 1px solid #e2e8f0;
        border-radius: 8px;
        padding: 12px;
        margin-bottom: 16px;
    }

    legend { font-weight: 600; color: #4a5568; padding: 0 6px; }

    label { display: block; color: #4a5568; font-size: 13px; margin: 8px 0 4px; }

    select, input[type="text"] {
        width: 100%;
        padding: 8px 10px;
        border: 2px solid #e2e8f0;
        border-radius: 6px;
        font-size: 14px;
    }

    .coin-container { max-width: 425px; }
    .coin-container svg { width: 100%; height: auto; }
    </style>
</head>
<body>
    <div class="panel controls">
        <h1>Escudo</h1>
        <p class="subtitle">Compose a two-faced heraldic coin from SVG fragments</p>

        <form id="generator-form">
            <fieldset>
                <legend>Heads</legend>
                <label for="icon-heads">Center icon</label>
                <select id="icon-heads" name="icon-heads" data-category="icons"></select>
                <label for="crown">Crown</label>
                <select id="crown" name="crown" data-category="crowns" data-optional></select>
                <label for="sides-heads">Laurels</label>
                <select id="sides-heads" name="sides-heads" data-category="laurels" data-optional></select>
            </fieldset>

            <fieldset>
                <legend>Tails</legend>
                <label for="shield-tails">Shield</label>
                <select id="shield-tails" name="shield-tails" data-category="shields"></select>
                <label for="icon-tails-1">Quadrant icons</label>
                <select id="icon-tails-1" name="icon-tails-1" data-category="icons" data-optional></select>
                <select id="icon-tails-2" name="icon-tails-2" data-category="icons" data-optional></select>
                <select id="icon-tails-3" name="icon-tails-3" data-category="icons" data-optional></select>
                <select id="icon-tails-4" name="icon-tails-4" data-category="icons" data-optional></select>
                <label for="crown-tails">Crown</label>
                <select id="crown-tails" name="crown-tails" data-category="crowns" data-optional></select>
                <label for="sides-tails">Laurels</label>
                <select id="sides-tails" name="sides-tails" data-category="laurels" data-optional></select>
            </fieldset>

            <fieldset>
                <legend>Inscriptions</legend>
                <label for="left-text">Left</label>
                <input type="text" id="left-text" name="left-text" placeholder="Left inscription">
                <label for="right-text">Right</label>
                <input type="text" id="right-text" name="right-text" placeholder="Right inscription">
                <label><input type="checkbox" name="debug"> Show center guides</label>
            </fieldset>
        </form>
    </div>

    <div class="panel">
        <div id="output"><p>Select fragments to mint a coin.</p></div>
    </div>

    <script>
    const form = document.getElementById('generator-form');
    const output = document.getElementById('output');

    async function loadCatalog() {
        const response = await fetch('/api/catalog');
        const catalog = await response.json();
        document.querySelectorAll('select[data-category]').forEach(select => {
            const entries = catalog[select.dataset.category] || [];
            if ('optional' in select.dataset) {
                select.append(new Option('(none)', 'none'));
            }
            entries.forEach(entry => select.append(new Option(entry.name, entry.path)));
        });
    }

    async function generate() {
        const body = new URLSearchParams(new FormData(form));
        try {
            const response = await fetch('/generate', { method: 'POST', body });
            if (!response.ok) {
                output.innerHTML = '<p>Error generating SVGs. Please try again.</p>';
                return;
            }
            const data = await response.json();
            output.innerHTML = `
                <div class="coin-container">${data.heads}</div>
                <div class="coin-container">${data.tails}</div>
                <p>
                    <a href="/download/${data.id}/heads">Download heads</a> |
                    <a href="/download/${data.id}/tails">Download tails</a>
                </p>
            `;
        } catch (error) {
            output.innerHTML = '<p>Error connecting to the server. Please try again.</p>';
        }
    }

    form.addEventListener('change', generate);
    loadCatalog().then(generate);
    </script>
</body>
</html>"#;
