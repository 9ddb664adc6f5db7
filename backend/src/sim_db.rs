use std::time::Duration;

use log::{debug, warn};
use rand::Rng;
use rocket::tokio::sync::RwLock;
use rocket::tokio::time::sleep;
use thiserror::Error;

use crate::seed::FIRST_ID;
use crate::structs::{NewNote, Note, NotePatch, NoteVector};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataStoreError {
    #[error("Simulated data store failure during {0}")]
    Fault(&'static str),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sim_min_delay_ms ({min}) is greater than sim_max_delay_ms ({max})")]
    DelayRange { min: u64, max: u64 },

    #[error("sim_fault_rate must be within 0.0 and 1.0, got {0}")]
    FaultRate(f64),
}

pub type Result<T> = std::result::Result<T, DataStoreError>;

/// Latency and failure behaviour of the simulated store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub fault_rate: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            min_delay_ms: 5,
            max_delay_ms: 50,
            fault_rate: 0.01,
        }
    }
}

impl SimConfig {
    /// No latency and no faults.
    pub fn instant() -> Self {
        SimConfig {
            min_delay_ms: 0,
            max_delay_ms: 0,
            fault_rate: 0.0,
        }
    }

    /// No latency, every call fails.
    pub fn always_failing() -> Self {
        SimConfig {
            fault_rate: 1.0,
            ..SimConfig::instant()
        }
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.min_delay_ms > self.max_delay_ms {
            return Err(ConfigError::DelayRange {
                min: self.min_delay_ms,
                max: self.max_delay_ms,
            });
        }
        if !(0.0..=1.0).contains(&self.fault_rate) {
            return Err(ConfigError::FaultRate(self.fault_rate));
        }
        Ok(())
    }

    // ThreadRng is not Send, so both draws happen before the first await.
    fn roll(&self) -> (Duration, bool) {
        let mut rng = rand::thread_rng();
        let delay = rng.gen_range(self.min_delay_ms..=self.max_delay_ms);
        let fault = rng.gen_bool(self.fault_rate);
        (Duration::from_millis(delay), fault)
    }
}

/// In-memory note collection that behaves like a slow, slightly unreliable
/// remote store.
pub struct SimDb {
    notes: RwLock<NoteVector>,
    config: SimConfig,
}

impl SimDb {
    /// Builds a store over a private copy of `seed`. Fails when `config`
    /// describes an impossible delay range or fault rate.
    pub fn initialize(seed: &[Note], config: SimConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(SimDb {
            notes: RwLock::new(seed.to_vec()),
            config,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    async fn settle(&self, operation: &'static str) -> Result<()> {
        let (delay, fault) = self.config.roll();
        if !delay.is_zero() {
            sleep(delay).await;
        }
        if fault {
            warn!("simulated fault in {}", operation);
            return Err(DataStoreError::Fault(operation));
        }
        debug!("{} settled after {:?}", operation, delay);
        Ok(())
    }

    pub async fn create(&self, new_note: NewNote) -> Result<Note> {
        self.settle("create").await?;

        let mut notes = self.notes.write().await;
        let id = notes.iter().map(|note| note.id).max().map_or(FIRST_ID, |max| max + 1);
        let note = Note {
            id,
            title: new_note.title,
            content: new_note.content,
        };
        notes.push(note.clone());

        Ok(note)
    }

    pub async fn find(&self, id: i64) -> Result<Option<Note>> {
        self.settle("find").await?;

        let notes = self.notes.read().await;
        Ok(notes.iter().find(|note| note.id == id).cloned())
    }

    /// Notes whose title or content contains `term`, or every note when the
    /// term is missing or empty.
    pub async fn filter(&self, term: Option<&str>) -> Result<NoteVector> {
        self.settle("filter").await?;

        let notes = self.notes.read().await;
        let list = match term {
            Some(term) if !term.is_empty() => notes
                .iter()
                .filter(|note| note.title.contains(term) || note.content.contains(term))
                .cloned()
                .collect(),
            _ => notes.clone(),
        };

        Ok(list)
    }

    pub async fn update(&self, id: i64, patch: NotePatch) -> Result<Option<Note>> {
        self.settle("update").await?;

        let mut notes = self.notes.write().await;
        let note = match notes.iter_mut().find(|note| note.id == id) {
            Some(note) => note,
            None => return Ok(None),
        };
        patch.apply(note);

        Ok(Some(note.clone()))
    }

    /// Returns whether a note was actually removed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.settle("delete").await?;

        let mut notes = self.notes.write().await;
        let before = notes.len();
        notes.retain(|note| note.id != id);

        Ok(notes.len() < before)
    }

    pub async fn len(&self) -> usize {
        self.notes.read().await.len()
    }
}
