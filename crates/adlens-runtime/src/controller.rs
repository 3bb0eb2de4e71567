//! Load orchestration around [`ViewState`].
//!
//! The controller owns the view state and a shared handle to the repository.
//! Console commands await [`CampaignController::load`] directly. The
//! dashboard calls [`CampaignController::spawn_load`], which runs the fetch on
//! a tokio task and reports back through a channel; the UI loop hands the
//! outcome to [`CampaignController::apply`] and the ticket decides whether it
//! still counts.

use adlens_engine::{LoadTicket, ViewState, validate_collection};
use adlens_types::CampaignRecord;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use tokio::runtime::Handle;

use crate::repository::CampaignRepository;
use crate::{Error, Result};

/// Fetch the collection and reject data that breaks domain rules
pub async fn fetch_validated<R>(repository: &R) -> Result<Vec<CampaignRecord>>
where
    R: CampaignRepository + ?Sized,
{
    let records = repository.list().await?;
    validate_collection(&records)?;
    Ok(records)
}

/// Result of a spawned load, tagged with the ticket it was started under
#[derive(Debug)]
pub struct LoadOutcome {
    pub ticket: LoadTicket,
    pub result: Result<Vec<CampaignRecord>>,
}

pub struct CampaignController<R: CampaignRepository + ?Sized> {
    repository: Arc<R>,
    state: ViewState,
}

impl<R: CampaignRepository + ?Sized + 'static> CampaignController<R> {
    pub fn new(repository: Arc<R>, state: ViewState) -> Self {
        Self { repository, state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    pub fn repository(&self) -> &R {
        self.repository.as_ref()
    }

    /// Load and apply in one step.
    ///
    /// On failure the state is left `Failed` with the error message and the
    /// error is also returned to the caller.
    pub async fn load(&mut self) -> Result<()> {
        let ticket = self.state.begin_load();
        match fetch_validated(self.repository.as_ref()).await {
            Ok(records) => {
                self.state.finish_load::<Error>(ticket, Ok(records));
                Ok(())
            }
            Err(err) => {
                self.state.finish_load(ticket, Err(&err));
                Err(err)
            }
        }
    }

    /// Start a load on `runtime`; the outcome is sent to `tx`.
    ///
    /// Starting another load before the outcome arrives supersedes this one.
    pub fn spawn_load(&mut self, runtime: &Handle, tx: Sender<LoadOutcome>) -> LoadTicket {
        let ticket = self.state.begin_load();
        let repository = Arc::clone(&self.repository);
        runtime.spawn(async move {
            let result = fetch_validated(repository.as_ref()).await;
            // receiver gone means the dashboard already exited
            let _ = tx.send(LoadOutcome { ticket, result });
        });
        ticket
    }

    /// Apply a spawned load's outcome. Returns false for superseded tickets.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        self.state.finish_load(outcome.ticket, outcome.result)
    }
}
