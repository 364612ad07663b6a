//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs in its own tokio task and reports back with exactly
//! one [`Message`]. Fetch results carry the requesting mount so the update
//! loop can drop results for viewers that no longer exist.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use specview_core::prelude::*;
use specview_core::{parse_document, DocumentNode};
use tokio::sync::mpsc;

use crate::clipboard::ClipboardPort;
use crate::message::Message;
use crate::source::{SourceFetcher, SourceFormat, SourceLocation};
use crate::viewer_state::MountId;
use crate::UpdateAction;

/// Ports the background tasks talk to
pub struct Services<F> {
    pub fetcher: Arc<F>,
    pub clipboard: Arc<dyn ClipboardPort>,
}

impl<F> Services<F> {
    pub fn new(fetcher: F, clipboard: Arc<dyn ClipboardPort>) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            clipboard,
        }
    }
}

impl<F> Clone for Services<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            clipboard: Arc::clone(&self.clipboard),
        }
    }
}

/// Execute an action by spawning a background task
pub fn handle_action<F>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, services: &Services<F>)
where
    F: SourceFetcher + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchDocument { mount, location } => {
            let fetcher = Arc::clone(&services.fetcher);
            tokio::spawn(async move {
                let message = fetch_document(fetcher.as_ref(), mount, &location).await;
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::FetchRawSource {
            mount,
            format,
            location,
        } => {
            let fetcher = Arc::clone(&services.fetcher);
            tokio::spawn(async move {
                let message = fetch_raw_source(fetcher.as_ref(), mount, format, &location).await;
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::CopyToClipboard { text, label } => {
            let clipboard = Arc::clone(&services.clipboard);
            tokio::spawn(async move {
                let message = copy_text(clipboard, text, label).await;
                send(&msg_tx, message).await;
            });
        }

        UpdateAction::SaveDownload { text, path } => {
            tokio::spawn(async move {
                let message = match save_download(&path, &text).await {
                    Ok(()) => Message::DownloadCompleted { path },
                    Err(e) => Message::DownloadFailed {
                        error: e.to_string(),
                    },
                };
                send(&msg_tx, message).await;
            });
        }
    }
}

/// Failures a retry can fix are reported by the handler; only log the detail
fn log_failure(what: &str, error: &Error) {
    if error.is_recoverable() {
        debug!("{} failed: {:?}", what, error);
    } else {
        error!("{} failed: {:?}", what, error);
    }
}

async fn send(msg_tx: &mpsc::Sender<Message>, message: Message) {
    if msg_tx.send(message).await.is_err() {
        debug!("Message channel closed; dropping task result");
    }
}

/// Fetch and parse the primary document
pub async fn load_document<F: SourceFetcher>(
    fetcher: &F,
    location: &SourceLocation,
) -> Result<DocumentNode> {
    let text = fetcher.fetch(location).await?;
    parse_document(&text)
}

async fn fetch_document<F: SourceFetcher>(
    fetcher: &F,
    mount: MountId,
    location: &SourceLocation,
) -> Message {
    match load_document(fetcher, location).await {
        Ok(document) => {
            info!("Loaded specification from {}", location);
            Message::DocumentLoaded { mount, document }
        }
        Err(e) => {
            log_failure("Specification load", &e);
            Message::DocumentLoadFailed {
                mount,
                error: e.to_string(),
            }
        }
    }
}

async fn fetch_raw_source<F: SourceFetcher>(
    fetcher: &F,
    mount: MountId,
    format: SourceFormat,
    location: &SourceLocation,
) -> Message {
    match fetcher.fetch(location).await {
        Ok(text) => Message::RawSourceLoaded {
            mount,
            format,
            text,
        },
        Err(e) => {
            log_failure(&format!("{} source fetch", format), &e);
            Message::RawSourceFailed {
                mount,
                format,
                error: e.to_string(),
            }
        }
    }
}

/// Clipboard commands block, so the copy runs on the blocking pool
async fn copy_text(clipboard: Arc<dyn ClipboardPort>, text: String, label: String) -> Message {
    let result = tokio::task::spawn_blocking(move || clipboard.copy(&text))
        .await
        .unwrap_or_else(|e| Err(Error::clipboard(format!("copy task failed: {}", e))));
    match result {
        Ok(()) => Message::CopyCompleted { label },
        Err(e) => Message::CopyFailed {
            label,
            error: e.to_string(),
        },
    }
}

/// Write `text` to `path`, creating its directory if needed
pub async fn save_download(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::download(path, e.to_string()))?;
    }
    tokio::fs::write(path, text)
        .await
        .map_err(|e| Error::download(PathBuf::from(path), e.to_string()))
}
