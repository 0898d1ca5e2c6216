//! Scripted stand-ins for the network and the terminal.

use crate::fetch::{FetchResponse, Fetcher};
use crate::select::{Candidate, Selection, VersionSelector};
use crate::version::VersionTag;
use async_trait::async_trait;
use futures_util::StreamExt;
use futures_util::stream;
use kv_core::Result;
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

/// Serves canned responses by URL and records every request.
#[derive(Default)]
pub(crate) struct StaticFetcher {
    routes: HashMap<String, (u16, Vec<u8>)>,
    truncated: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, url: &str, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.routes.insert(url.to_string(), (status, body.into()));
        self
    }

    /// Answer 200, send `head`, then fail the body as a dropped connection would.
    pub(crate) fn route_truncated(mut self, url: &str, head: impl Into<Vec<u8>>) -> Self {
        self.truncated.insert(url.to_string(), head.into());
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    async fn get(&self, url: &str) -> io::Result<FetchResponse> {
        self.requests.lock().unwrap().push(url.to_string());
        if let Some(head) = self.truncated.get(url) {
            let chunks = vec![
                Ok(head.clone()),
                Err(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    "connection reset by peer",
                )),
            ];
            return Ok(FetchResponse {
                status: 200,
                content_length: Some(head.len() as u64 * 4),
                body: stream::iter(chunks).boxed(),
            });
        }
        match self.routes.get(url) {
            Some((status, body)) => Ok(FetchResponse::from_bytes(*status, body.clone())),
            None => Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("no route to {url}"),
            )),
        }
    }
}

/// Picks a fixed version, or cancels, and records what it was shown.
pub(crate) struct ScriptedSelector {
    choice: Option<String>,
    shown: Mutex<Vec<Candidate>>,
}

impl ScriptedSelector {
    pub(crate) fn choose(version: &str) -> Self {
        Self {
            choice: Some(version.to_string()),
            shown: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn cancel() -> Self {
        Self {
            choice: None,
            shown: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn shown(&self) -> Vec<Candidate> {
        self.shown.lock().unwrap().clone()
    }
}

impl VersionSelector for ScriptedSelector {
    fn select(&self, candidates: &[Candidate]) -> Result<Selection> {
        *self.shown.lock().unwrap() = candidates.to_vec();
        Ok(match &self.choice {
            Some(version) => Selection::Chosen(VersionTag::normalize(version)),
            None => Selection::Cancelled,
        })
    }
}

/// GitHub-style release list body.
pub(crate) fn releases_json(tags: &[&str]) -> String {
    let entries: Vec<String> = tags
        .iter()
        .map(|tag| format!(r#"{{"tag_name":"{tag}","name":"Kubernetes {tag}"}}"#))
        .collect();
    format!("[{}]", entries.join(","))
}
