//! Reporting engine: lifecycle, fixed-rate scheduler, and poll pass.

use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use tokio::runtime::{Builder, Handle, Runtime};
use tokio::time::MissedTickBehavior;

use gaugelink_core::error::{GaugeLinkError, Result};
use gaugelink_core::name::{DEFAULT_PREFIX, DEFAULT_UPDATE_INTERVAL_MS};

use crate::measure::Measurement;
use crate::registry::MetricRegistry;
use crate::sink::GaugeSink;

/// Producer notification interface.
///
/// The upstream measurement-producing system calls these synchronously as
/// metrics appear, change, and disappear. All three are quick registry
/// writes and never block on the poll task.
pub trait MetricEvents {
    /// Bulk registration of an initial known set.
    fn on_added(&self, handles: &[Arc<dyn Measurement>]);
    /// A metric was added or its definition changed; the entry (including
    /// its resolved name) is recomputed from scratch.
    fn on_changed(&self, handle: Arc<dyn Measurement>) -> Result<String>;
    /// A metric disappeared; no-op when it was never registered.
    fn on_removed(&self, handle: &dyn Measurement);
}

/// Options accepted by [`GaugeReporter::configure`].
pub struct ReporterOptions {
    /// Downstream sink. Required.
    pub sink: Option<Arc<dyn GaugeSink>>,
    /// Execution context to schedule the poll task on. When absent the
    /// reporter builds and owns a single-worker runtime; when supplied,
    /// ownership stays with the caller and `close` never stops it.
    pub executor: Option<Handle>,
    /// Interval between poll passes. Default 30000 ms.
    pub update_interval_ms: Option<u64>,
    /// Leading segment of every resolved gauge name. Default "kafka".
    pub prefix: Option<String>,
}

impl ReporterOptions {
    pub fn new(sink: Arc<dyn GaugeSink>) -> Self {
        Self {
            sink: Some(sink),
            executor: None,
            update_interval_ms: None,
            prefix: None,
        }
    }

    pub fn with_executor(mut self, executor: Handle) -> Self {
        self.executor = Some(executor);
        self
    }

    pub fn with_interval_ms(mut self, update_interval_ms: u64) -> Self {
        self.update_interval_ms = Some(update_interval_ms);
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Fold file-loaded settings into the options.
    pub fn with_settings(mut self, settings: &crate::config::ReporterSection) -> Self {
        self.update_interval_ms = Some(settings.update_interval_ms);
        self.prefix = Some(settings.prefix.clone());
        self
    }

    fn validate(&self) -> Result<()> {
        if self.update_interval_ms == Some(0) {
            return Err(GaugeLinkError::Config(
                "update_interval_ms must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ReporterOptions {
    fn default() -> Self {
        Self {
            sink: None,
            executor: None,
            update_interval_ms: None,
            prefix: None,
        }
    }
}

/// Who owns the execution context decides who may stop it.
enum Executor {
    Owned(Runtime),
    External(Handle),
}

impl Executor {
    fn handle(&self) -> Handle {
        match self {
            Executor::Owned(rt) => rt.handle().clone(),
            Executor::External(h) => h.clone(),
        }
    }
}

enum Lifecycle {
    Unconfigured,
    Running(Executor),
    Closed,
}

/// Periodic metrics-reporting engine.
///
/// Owns the registry from construction; `configure` starts the fixed-rate
/// poll task, `close` ends scheduling. Producer notifications arrive via
/// [`MetricEvents`].
pub struct GaugeReporter {
    registry: Arc<MetricRegistry>,
    prefix: RwLock<Arc<str>>,
    state: Mutex<Lifecycle>,
}

impl GaugeReporter {
    pub fn new() -> Self {
        Self {
            registry: Arc::new(MetricRegistry::new()),
            prefix: RwLock::new(Arc::from(DEFAULT_PREFIX)),
            state: Mutex::new(Lifecycle::Unconfigured),
        }
    }

    /// Registry owned by this engine instance.
    pub fn registry(&self) -> &MetricRegistry {
        &self.registry
    }

    fn prefix(&self) -> Arc<str> {
        let guard = self.prefix.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Validate options, apply defaults, and start the poll schedule.
    ///
    /// Fails with a configuration error when the sink is absent or the
    /// instance is not Unconfigured; in both cases nothing is scheduled and
    /// prior state is untouched.
    pub fn configure(&self, options: ReporterOptions) -> Result<()> {
        options.validate()?;
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match *state {
            Lifecycle::Unconfigured => {}
            Lifecycle::Running(_) => {
                return Err(GaugeLinkError::Config("reporter already configured".into()))
            }
            Lifecycle::Closed => {
                return Err(GaugeLinkError::Config("reporter already closed".into()))
            }
        }
        let sink = options
            .sink
            .ok_or_else(|| GaugeLinkError::Config("sink is required".into()))?;

        let interval_ms = options
            .update_interval_ms
            .unwrap_or(DEFAULT_UPDATE_INTERVAL_MS);
        let prefix = options
            .prefix
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_PREFIX.to_string());
        {
            let mut guard = self.prefix.write().unwrap_or_else(|e| e.into_inner());
            *guard = Arc::from(prefix.as_str());
        }

        let executor = match options.executor {
            Some(handle) => Executor::External(handle),
            None => Executor::Owned(
                Builder::new_multi_thread()
                    .worker_threads(1)
                    .thread_name("gaugelink-poll")
                    .enable_all()
                    .build()
                    .map_err(|e| {
                        GaugeLinkError::Internal(format!("failed to build poll runtime: {e}"))
                    })?,
            ),
        };

        let registry = Arc::clone(&self.registry);
        executor.handle().spawn(poll_loop(registry, sink, interval_ms));
        *state = Lifecycle::Running(executor);

        tracing::info!(interval_ms, %prefix, "metrics reporting scheduled");
        Ok(())
    }

    /// Stop the internally owned execution context, if any.
    ///
    /// Idempotent; safe on an unconfigured instance. An externally supplied
    /// execution context is never stopped here, so its scheduled passes keep
    /// running until the caller shuts their runtime down.
    pub fn close(&self) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        match std::mem::replace(&mut *state, Lifecycle::Closed) {
            Lifecycle::Running(Executor::Owned(rt)) => {
                rt.shutdown_background();
                tracing::info!("reporter closed, internal executor stopped");
            }
            Lifecycle::Running(Executor::External(_)) => {
                tracing::debug!("reporter closed, external executor left to its owner");
            }
            Lifecycle::Unconfigured | Lifecycle::Closed => {}
        }
    }
}

impl Default for GaugeReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricEvents for GaugeReporter {
    fn on_added(&self, handles: &[Arc<dyn Measurement>]) {
        self.registry.init(handles, &self.prefix());
    }

    fn on_changed(&self, handle: Arc<dyn Measurement>) -> Result<String> {
        self.registry.upsert(handle, &self.prefix())
    }

    fn on_removed(&self, handle: &dyn Measurement) {
        if let Some(name) = self.registry.remove(handle) {
            tracing::debug!(metric = %name, "metric removed");
        }
    }
}

/// Fixed-rate schedule: first pass immediately, then one per interval.
/// An overrunning pass defers the next tick; passes never overlap.
async fn poll_loop(registry: Arc<MetricRegistry>, sink: Arc<dyn GaugeSink>, interval_ms: u64) {
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        run_pass(&registry, sink.as_ref()).await;
    }
}

/// One poll pass: push every entry's current value to the sink.
///
/// Failure isolation is per-entry: a failing read or submit is logged and
/// the entry stays registered for the next pass.
async fn run_pass(registry: &MetricRegistry, sink: &dyn GaugeSink) {
    for entry in registry.snapshot() {
        let value = match entry.read() {
            Ok(v) => v,
            Err(err) => {
                tracing::warn!(metric = %entry.resolved_name(), %err, "measurement read failed");
                continue;
            }
        };
        tracing::trace!(metric = %entry.resolved_name(), value, "submitting gauge");
        if let Err(err) = sink.submit(entry.resolved_name(), value).await {
            tracing::warn!(metric = %entry.resolved_name(), %err, "sink submit failed");
        }
    }
}
