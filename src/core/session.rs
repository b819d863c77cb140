//! Per-browser session state.
//!
//! Every browser session owns one [`Session`]: its records and the day counter
//! that numbers them. Nothing here is shared between sessions and nothing
//! outlives the process.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use parking_lot::Mutex;
use uuid::Uuid;

use crate::data::{DailyCounter, RecordDraft, RecordStore, SampleRecord};

/// State for one interactive session.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    last_seen: DateTime<Utc>,
    records: RecordStore,
    counter: DailyCounter,
}

impl Session {
    /// Start a session with no records and an empty counter.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            last_seen: now,
            records: RecordStore::new(),
            counter: DailyCounter::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn last_seen(&self) -> DateTime<Utc> {
        self.last_seen
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn counter(&self) -> &DailyCounter {
        &self.counter
    }

    /// Mint a tracking number for `date_received` and append the record in one
    /// step, so a minted number is never left unused.
    pub fn create_record(&mut self, draft: RecordDraft) -> &SampleRecord {
        let tracking_number = self.counter.next_tracking_number(draft.date_received);
        self.records.push(SampleRecord::new(tracking_number, draft))
    }

    pub fn record_mut(&mut self, tracking_number: &str) -> Option<&mut SampleRecord> {
        self.records.find_mut(tracking_number)
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.last_seen = now;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Upper bound on the idle timeout (ten years).
const MAX_IDLE_MINUTES: u64 = 10 * 365 * 24 * 60;

/// Outcome of looking up a browser's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSession {
    pub id: Uuid,
    /// True when a fresh session had to be started
    pub created: bool,
}

/// Owns every live session, keyed by the id stored in the browser cookie.
#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    idle_timeout: Duration,
}

impl SessionManager {
    pub fn new(idle_timeout_minutes: u64) -> Self {
        let minutes = idle_timeout_minutes.clamp(1, MAX_IDLE_MINUTES) as i64;
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout: Duration::minutes(minutes),
        }
    }

    /// Find the session for `candidate`, or start a new one.
    ///
    /// Unknown ids (expired, or from before a restart) are never adopted; the
    /// browser gets a freshly generated id instead.
    pub fn resolve(&self, candidate: Option<Uuid>) -> ResolvedSession {
        let now = Utc::now();
        let mut sessions = self.sessions.lock();

        if let Some(id) = candidate {
            if let Some(session) = sessions.get_mut(&id) {
                session.touch(now);
                return ResolvedSession { id, created: false };
            }
        }

        let pruned = Self::prune_locked(&mut sessions, now, self.idle_timeout);
        if pruned > 0 {
            tracing::info!(pruned, "Dropped idle sessions");
        }

        let session = Session::new();
        let id = session.id();
        sessions.insert(id, session);
        tracing::info!(session_id = %id, live = sessions.len(), "Started session");

        ResolvedSession { id, created: true }
    }

    /// Look up a live session without starting one. Marks it as seen.
    pub fn find(&self, candidate: Option<Uuid>) -> Option<Uuid> {
        let id = candidate?;
        let mut sessions = self.sessions.lock();
        let session = sessions.get_mut(&id)?;
        session.touch(Utc::now());
        Some(id)
    }

    /// Run `f` against the session `id`, if it is still live.
    pub fn with_session<R>(&self, id: Uuid, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        let mut sessions = self.sessions.lock();
        sessions.get_mut(&id).map(f)
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }

    /// Drop sessions idle since before `now - idle_timeout`. Returns how many went.
    pub fn prune_idle(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.lock();
        Self::prune_locked(&mut sessions, now, self.idle_timeout)
    }

    fn prune_locked(
        sessions: &mut HashMap<Uuid, Session>,
        now: DateTime<Utc>,
        idle_timeout: Duration,
    ) -> usize {
        let before = sessions.len();
        sessions.retain(|_, s| now.signed_duration_since(s.last_seen) <= idle_timeout);
        before - sessions.len()
    }
}

/// The local calendar date, used wherever a form field defaults to "today".
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
