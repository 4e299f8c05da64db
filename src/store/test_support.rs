//! Scripted comment store for exercising the panel without a network.
//!
//! Each call pops the next scripted result; unscripted calls fall back to an
//! empty page (list) or an echoed comment (create). All calls and their
//! arguments are recorded so tests can assert exact request counts and page
//! windows.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use super::{Comment, CommentStore, StoreError};

/// Comment store that replays scripted results and records every call.
#[derive(Debug, Default)]
pub struct ScriptedStore {
    pages: Mutex<VecDeque<Result<Vec<Comment>, StoreError>>>,
    creates: Mutex<VecDeque<Result<Comment, StoreError>>>,
    list_windows: Mutex<Vec<(u64, u32)>>,
    create_args: Mutex<Vec<(String, String)>>,
}

impl ScriptedStore {
    /// Queues the next `list_page` result.
    pub fn push_page(&self, page: Result<Vec<Comment>, StoreError>) {
        lock(&self.pages).push_back(page);
    }

    /// Queues the next `create` result.
    pub fn push_create(&self, result: Result<Comment, StoreError>) {
        lock(&self.creates).push_back(result);
    }

    /// Number of `list_page` calls issued so far.
    #[must_use]
    pub fn list_call_count(&self) -> usize {
        lock(&self.list_windows).len()
    }

    /// Number of `create` calls issued so far.
    #[must_use]
    pub fn create_call_count(&self) -> usize {
        lock(&self.create_args).len()
    }

    /// The `(offset, limit)` window of every `list_page` call, in order.
    #[must_use]
    pub fn recorded_windows(&self) -> Vec<(u64, u32)> {
        lock(&self.list_windows).clone()
    }

    /// The `(author_name, body)` arguments of every `create` call, in order.
    #[must_use]
    pub fn recorded_creates(&self) -> Vec<(String, String)> {
        lock(&self.create_args).clone()
    }
}

#[async_trait]
impl CommentStore for ScriptedStore {
    async fn list_page(&self, offset: u64, limit: u32) -> Result<Vec<Comment>, StoreError> {
        lock(&self.list_windows).push((offset, limit));
        lock(&self.pages)
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create(&self, author_name: &str, body: &str) -> Result<Comment, StoreError> {
        let call_index = {
            let mut args = lock(&self.create_args);
            args.push((author_name.to_owned(), body.to_owned()));
            args.len()
        };
        lock(&self.creates).pop_front().unwrap_or_else(|| {
            Ok(Comment {
                id: 1000 + u64::try_from(call_index).unwrap_or_default(),
                record_id: "entrega-42".to_owned(),
                author_name: author_name.to_owned(),
                body: body.to_owned(),
                created_at: Utc
                    .with_ymd_and_hms(2026, 8, 5, 12, 0, 0)
                    .single()
                    .unwrap_or_default(),
            })
        })
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
