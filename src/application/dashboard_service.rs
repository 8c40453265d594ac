// Dashboard service - Owns the live dashboard state on a single task
use crate::application::error::DashboardError;
use crate::application::file_import::parse_upload;
use crate::application::seed_repository::SeedRepository;
use crate::application::simulator::{DashboardEvent, DashboardState, Outcome};
use crate::domain::industry::Industry;
use crate::domain::metric::{Metric, MetricForm};
use chrono::{Local, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Instant, MissedTickBehavior};

#[derive(Debug, Clone)]
pub struct SimulatorSettings {
    pub tick_interval: Duration,
    pub series_length: usize,
}

struct Command {
    event: DashboardEvent,
    reply: oneshot::Sender<Outcome>,
}

/// Handle to the simulator task.
///
/// The task is the only writer of dashboard state: ticks and user commands
/// are applied one at a time, and each new state is published whole through
/// a watch channel. Dropping the last handle stops the task and its timer.
#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn SeedRepository>,
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<Arc<DashboardState>>,
}

impl DashboardService {
    pub async fn start(
        repository: Arc<dyn SeedRepository>,
        settings: SimulatorSettings,
        industry_id: &str,
    ) -> Result<Self, DashboardError> {
        let seed = repository.load_seed(industry_id).await?;
        let mut rng = StdRng::from_entropy();
        let state = DashboardState::from_seed(seed, settings.series_length, &mut rng);

        let (commands_tx, commands_rx) = mpsc::channel(32);
        let (snapshots_tx, snapshots_rx) = watch::channel(Arc::new(state.clone()));

        tracing::info!(
            "Starting simulator for {} (tick every {:?})",
            industry_id,
            settings.tick_interval
        );
        tokio::spawn(run_simulator(
            state,
            rng,
            commands_rx,
            snapshots_tx,
            settings.tick_interval,
        ));

        Ok(Self {
            repository,
            commands: commands_tx,
            snapshots: snapshots_rx,
        })
    }

    /// Latest published state
    pub fn snapshot(&self) -> Arc<DashboardState> {
        self.snapshots.borrow().clone()
    }

    /// Receiver that wakes on every published state
    pub fn subscribe(&self) -> watch::Receiver<Arc<DashboardState>> {
        self.snapshots.clone()
    }

    pub async fn list_industries(&self) -> Result<Vec<Industry>, DashboardError> {
        self.repository.list_industries().await
    }

    pub async fn select_industry(&self, industry_id: &str) -> Result<Arc<DashboardState>, DashboardError> {
        let seed = self.repository.load_seed(industry_id).await?;
        self.send(DashboardEvent::Reseed(seed)).await?;
        tracing::info!("Switched dashboard to {}", industry_id);
        Ok(self.snapshot())
    }

    /// Append a user-entered KPI. `Ok(None)` means the form was not valid
    /// and nothing changed.
    pub async fn add_metric(&self, form: MetricForm) -> Result<Option<Metric>, DashboardError> {
        let id = Utc::now().timestamp_millis().to_string();
        match self.send(DashboardEvent::AddMetric { form, id }).await? {
            Outcome::MetricAdded(metric) => {
                tracing::info!("Added metric {} ({})", metric.name, metric.id);
                Ok(Some(metric))
            }
            _ => {
                tracing::debug!("Ignored incomplete metric form");
                Ok(None)
            }
        }
    }

    /// Parse an uploaded file and log the result. Parse failures stay here;
    /// the dashboard never shows uploaded data.
    pub async fn import_file(&self, file_name: &str, content: &str) -> Result<(), DashboardError> {
        match parse_upload(file_name, content) {
            Ok(data) => {
                let records = data.record_count();
                tracing::info!("Parsed upload {}: {} records", file_name, records);
                tracing::debug!("Upload contents: {:?}", data);
                self.send(DashboardEvent::FileImported {
                    file_name: file_name.to_string(),
                    records,
                })
                .await?;
            }
            Err(e) => {
                tracing::error!("Error parsing upload {}: {}", file_name, e);
            }
        }
        Ok(())
    }

    async fn send(&self, event: DashboardEvent) -> Result<Outcome, DashboardError> {
        let (reply, outcome) = oneshot::channel();
        self.commands
            .send(Command { event, reply })
            .await
            .map_err(|_| DashboardError::ServiceStopped)?;
        outcome.await.map_err(|_| DashboardError::ServiceStopped)
    }
}

async fn run_simulator(
    mut state: DashboardState,
    mut rng: StdRng,
    mut commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<Arc<DashboardState>>,
    period: Duration,
) {
    let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        let (event, reply) = tokio::select! {
            _ = ticker.tick() => (DashboardEvent::Tick { at: Local::now().time() }, None),
            command = commands.recv() => match command {
                Some(Command { event, reply }) => (event, Some(reply)),
                None => break,
            },
        };

        let (next, outcome) = state.apply(event, &mut rng);
        state = next;

        if !matches!(outcome, Outcome::Rejected | Outcome::Unchanged) {
            snapshots.send_replace(Arc::new(state.clone()));
        }
        if let Some(reply) = reply {
            let _ = reply.send(outcome);
        }
    }

    tracing::info!("Simulator stopped after {} ticks", state.ticks);
}
