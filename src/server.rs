//! Web front-end: session operations behind an axum API, plus the page.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tokio::sync::Mutex;

use crate::session::Session;

/// Shared app state: one session, one operation at a time through the lock.
pub type AppState = Arc<Mutex<Session>>;

/// Request body carrying a server-side file path.
#[derive(serde::Deserialize)]
pub struct PathRequest {
    pub path: PathBuf,
}

/// Outcome of an operation: the message is either the result text or a
/// user-visible error.
#[derive(serde::Serialize)]
pub struct OpResponse {
    pub ok: bool,
    pub message: String,
}

impl OpResponse {
    fn ok(message: String) -> Self {
        Self { ok: true, message }
    }

    fn err(message: String) -> Self {
        Self { ok: false, message }
    }
}

/// Current session state for the page labels.
#[derive(serde::Serialize)]
pub struct Status {
    pub document: Option<String>,
    pub stop_words: usize,
    pub tags: usize,
}

/// GET /status -> selected document, stop-word count, tag count.
pub async fn status_handler(State(session): State<AppState>) -> Json<Status> {
    let session = session.lock().await;
    Json(Status {
        document: session.document().map(|p| p.display().to_string()),
        stop_words: session.stop_word_count(),
        tags: session.tags().len(),
    })
}

/// POST /document { path } -> select the document to extract from.
pub async fn document_handler(
    State(session): State<AppState>,
    Json(req): Json<PathRequest>,
) -> Json<OpResponse> {
    let mut session = session.lock().await;
    session.load_document(&req.path);
    Json(OpResponse::ok(format!("Document: {}", req.path.display())))
}

/// POST /stopwords { path } -> replace the stop-word set from a file.
pub async fn stopwords_handler(
    State(session): State<AppState>,
    Json(req): Json<PathRequest>,
) -> Json<OpResponse> {
    let mut session = session.lock().await;
    let response = match session.load_stop_words(&req.path) {
        Ok(()) => OpResponse::ok(format!("Loaded {} stop words", session.stop_word_count())),
        Err(e) => OpResponse::err(format!("Error loading stop words: {e}")),
    };
    Json(response)
}

/// POST /extract -> rebuild the tag map, return the formatted table.
pub async fn extract_handler(State(session): State<AppState>) -> Json<OpResponse> {
    let mut session = session.lock().await;
    let response = match session.extract() {
        Ok(_) => OpResponse::ok(session.format_tags()),
        Err(e) => OpResponse::err(format!("Error reading document: {e}")),
    };
    Json(response)
}

/// POST /save { path } -> export the tag map as CSV to a server-side path.
pub async fn save_handler(
    State(session): State<AppState>,
    Json(req): Json<PathRequest>,
) -> Json<OpResponse> {
    let session = session.lock().await;
    let response = match session.save(&req.path) {
        Ok(()) => OpResponse::ok(format!("Tags saved to {}", req.path.display())),
        Err(e) => OpResponse::err(format!("Error saving: {e}")),
    };
    Json(response)
}

/// GET / -> static HTML page with the extractor controls.
pub async fn index_page() -> axum::response::Html<&'static str> {
    const HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Tag Extractor</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }
    h1 { font-size: 1.5rem; }
    .labels p { margin: 0.25rem 0; color: #333; }
    .row { display: flex; gap: 0.5rem; margin: 0.5rem 0; }
    input[type="text"] { flex: 1; padding: 0.5rem; font-size: 1rem; box-sizing: border-box; }
    button { padding: 0.5rem 1rem; font-size: 1rem; cursor: pointer; }
    #output { margin-top: 1.5rem; padding: 1rem; background: #f6f6f6; border: 1px solid #ddd;
              font-family: monospace; font-size: 0.875rem; white-space: pre; min-height: 12rem; }
    .error { color: #b00; }
  </style>
</head>
<body>
  <h1>Tag Extractor</h1>
  <div class="labels">
    <p id="doc-label">Document: (none selected)</p>
    <p id="stop-label">Stop words file: (none selected)</p>
  </div>
  <div class="row">
    <input type="text" id="doc-path" placeholder="Path to document">
    <button id="load-doc">Load Document</button>
  </div>
  <div class="row">
    <input type="text" id="stop-path" placeholder="Path to stop-word list">
    <button id="load-stop">Load Stop Words</button>
  </div>
  <div class="row">
    <button id="extract">Extract Tags</button>
    <input type="text" id="save-path" placeholder="Path for CSV export">
    <button id="save">Save Tags</button>
  </div>
  <div id="output"></div>
  <script>
    const output = document.getElementById('output');

    async function post(url, body) {
      const r = await fetch(url, {
        method: 'POST',
        headers: body ? { 'Content-Type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined,
      });
      return r.json();
    }

    async function refreshLabels() {
      const s = await (await fetch('/status')).json();
      document.getElementById('doc-label').textContent =
        'Document: ' + (s.document || '(none selected)');
      document.getElementById('stop-label').textContent =
        'Stop words: ' + s.stop_words + ' loaded';
    }

    function show(res) {
      output.textContent = res.message;
      output.className = res.ok ? '' : 'error';
    }

    document.getElementById('load-doc').addEventListener('click', async () => {
      const path = document.getElementById('doc-path').value.trim();
      if (!path) return;
      show(await post('/document', { path }));
      refreshLabels();
    });

    document.getElementById('load-stop').addEventListener('click', async () => {
      const path = document.getElementById('stop-path').value.trim();
      if (!path) return;
      show(await post('/stopwords', { path }));
      refreshLabels();
    });

    document.getElementById('extract').addEventListener('click', async () => {
      show(await post('/extract'));
      refreshLabels();
    });

    document.getElementById('save').addEventListener('click', async () => {
      const path = document.getElementById('save-path').value.trim();
      if (!path) return;
      show(await post('/save', { path }));
    });

    refreshLabels();
  </script>
</body>
</html>
"#;
    axum::response::Html(HTML)
}
