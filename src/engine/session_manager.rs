// src/engine/session_manager.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, RwLock};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, info};

use crate::api::dto::GameStateDto;
use crate::domain::SessionId;
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;
use crate::engine::session::GameSession;
use crate::infra::ids::IdGenerator;

/// Ошибки уровня реестра сессий (над одной сессией).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ManagerError {
    /// Сессия с таким ID не найдена.
    #[error("Session {0} not found")]
    SessionNotFound(SessionId),

    /// Кто-то запаниковал, держа лок сессии или реестра.
    #[error("Session lock poisoned")]
    Poisoned,

    /// Проброшенная ошибка из движка.
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Одна сессия в реестре.
struct Entry {
    session: Arc<Mutex<GameSession>>,
    last_access: Mutex<Instant>,
}

impl Entry {
    fn touch(&self) {
        if let Ok(mut at) = self.last_access.lock() {
            *at = Instant::now();
        }
    }

    fn idle_for(&self, now: Instant) -> Duration {
        self.last_access
            .lock()
            .map(|at| now.saturating_duration_since(*at))
            .unwrap_or_default()
    }
}

/// Реестр матчей:
/// - хранит сессии по `SessionId`;
/// - каждая сессия под своим `Mutex`, разные сессии работают параллельно;
/// - сама карта под `RwLock` и пишется только при создании/удалении.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<SessionId, Entry>>,
    ids: IdGenerator,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Зарегистрировать сессию и сразу начать матч.
    pub fn create(&self, mut session: GameSession) -> Result<(SessionId, GameStateDto), ManagerError> {
        let state = session.start_game()?;
        let id = self.ids.next_session_id();

        let entry = Entry {
            session: Arc::new(Mutex::new(session)),
            last_access: Mutex::new(Instant::now()),
        };
        self.sessions
            .write()
            .map_err(|_| ManagerError::Poisoned)?
            .insert(id, entry);

        info!(session_id = id, "session created");
        Ok((id, state))
    }

    pub fn submit_action(&self, id: SessionId, action: Action) -> Result<GameStateDto, ManagerError> {
        self.with_session(id, |s| s.submit_action(action))
    }

    pub fn advance_round(&self, id: SessionId) -> Result<GameStateDto, ManagerError> {
        self.with_session(id, |s| s.advance_round())
    }

    pub fn state(&self, id: SessionId) -> Result<GameStateDto, ManagerError> {
        self.with_session(id, |s| s.state())
    }

    /// Удалить сессию. `SessionNotFound`, если её не было.
    pub fn remove(&self, id: SessionId) -> Result<(), ManagerError> {
        let removed = self
            .sessions
            .write()
            .map_err(|_| ManagerError::Poisoned)?
            .remove(&id);

        match removed {
            Some(_) => {
                debug!(session_id = id, "session removed");
                Ok(())
            }
            None => Err(ManagerError::SessionNotFound(id)),
        }
    }

    /// Убрать законченные матчи. Возвращает, сколько удалено.
    pub fn evict_finished(&self) -> Result<usize, ManagerError> {
        let mut map = self.sessions.write().map_err(|_| ManagerError::Poisoned)?;
        let before = map.len();
        map.retain(|_, entry| match entry.session.lock() {
            Ok(s) => !s.is_finished(),
            Err(_) => false,
        });
        Ok(before - map.len())
    }

    /// Убрать сессии, к которым не обращались дольше `max_idle`.
    pub fn evict_idle(&self, max_idle: Duration) -> Result<usize, ManagerError> {
        let now = Instant::now();
        let mut map = self.sessions.write().map_err(|_| ManagerError::Poisoned)?;
        let before = map.len();
        map.retain(|_, entry| entry.idle_for(now) <= max_idle);
        let evicted = before - map.len();
        if evicted > 0 {
            info!(evicted, "idle sessions evicted");
        }
        Ok(evicted)
    }

    pub fn len(&self) -> usize {
        self.sessions.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions
            .read()
            .map(|m| m.contains_key(&id))
            .unwrap_or(false)
    }

    /// Взять сессию под её собственным локом; лок карты держится только на поиск.
    fn with_session<T>(
        &self,
        id: SessionId,
        f: impl FnOnce(&mut GameSession) -> Result<T, EngineError>,
    ) -> Result<T, ManagerError> {
        let session = {
            let map = self.sessions.read().map_err(|_| ManagerError::Poisoned)?;
            let entry = map.get(&id).ok_or(ManagerError::SessionNotFound(id))?;
            entry.touch();
            Arc::clone(&entry.session)
        };

        let mut guard: MutexGuard<'_, GameSession> =
            session.lock().map_err(|_| ManagerError::Poisoned)?;
        Ok(f(&mut guard)?)
    }
}
