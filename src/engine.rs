//! Navigation state orchestration
//!
//! `NavigationEngine` owns the whole mutable aggregate: user position,
//! selected destination, navigation flag, and the derived path. All mutation
//! goes through named intent methods, and every committed change to the
//! position or destination recomputes the path before the method returns, so
//! observers never see a path that disagrees with the state it was derived
//! from. Timer-driven work (drift, scans) is drained by `advance`, which the
//! embedder calls from its update loop with the current logical clock.

use log::{debug, warn};

use crate::catalog::DestinationCatalog;
use crate::core::{Destination, Position3, PATH_STEPS};
use crate::error::{NavError, NavResult};
use crate::path::generate_path;
use crate::projection::{ScreenAnchor, ScreenProjector};
use crate::simulation::{DriftSimulator, ScanTask};

/// Interaction mode selected from the dock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Map,
    Qr,
    Compass,
    Settings,
}

/// Read-only view of the engine state handed to renderers and status
/// displays. Captured atomically; holds no references into the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct NavSnapshot {
    pub user_position: Position3,
    pub destination: Option<Destination>,
    pub is_navigating: bool,
    pub path: Vec<Position3>,
    pub distance_to_destination: f64,
    pub mode: Mode,
    pub show_panel: bool,
    pub ar_connected: bool,
}

/// The positioning and path rendering engine.
pub struct NavigationEngine {
    catalog: DestinationCatalog,
    projector: ScreenProjector,
    user_position: Position3,
    destination: Option<Destination>,
    is_navigating: bool,
    path: Vec<Position3>,
    mode: Mode,
    show_panel: bool,
    ar_connected: bool,
    drift: DriftSimulator,
    pending_scan: Option<ScanTask>,
    scan_seed: Option<u64>,
    clock_ms: u64,
}

impl NavigationEngine {
    /// Create an engine at the building origin with no destination.
    pub fn new(catalog: DestinationCatalog) -> Self {
        Self::build(catalog, DriftSimulator::new(), None)
    }

    /// Deterministic engine for tests and session replay: the drift
    /// simulator and every scan draw from seeded generators.
    pub fn with_seed(catalog: DestinationCatalog, seed: u64) -> Self {
        Self::build(catalog, DriftSimulator::with_seed(seed), Some(seed))
    }

    fn build(catalog: DestinationCatalog, drift: DriftSimulator, scan_seed: Option<u64>) -> Self {
        Self {
            catalog,
            projector: ScreenProjector::default(),
            user_position: Position3::origin(),
            destination: None,
            is_navigating: false,
            path: Vec::new(),
            mode: Mode::Navigate,
            show_panel: false,
            ar_connected: true,
            drift,
            pending_scan: None,
            scan_seed,
            clock_ms: 0,
        }
    }

    // ---- Inbound intents ----------------------------------------------

    /// Select a destination by id. Sets `is_navigating`, closes the panel,
    /// and recomputes the path. An unknown id is a silent no-op: state is
    /// untouched and `false` comes back.
    pub fn select_destination(&mut self, id: &str) -> bool {
        match self.try_select_destination(id) {
            Ok(()) => true,
            Err(e) => {
                warn!("rejected destination selection: {}", e);
                false
            }
        }
    }

    /// Checked variant of `select_destination` for callers that want the
    /// rejection reason.
    pub fn try_select_destination(&mut self, id: &str) -> NavResult<()> {
        let destination = self
            .catalog
            .find(id)
            .cloned()
            .ok_or_else(|| NavError::UnknownDestination { id: id.to_string() })?;

        debug!(
            "navigating to '{}' at ({}, {}, {})",
            destination.id, destination.position.x, destination.position.y, destination.position.z
        );
        self.destination = Some(destination);
        self.show_panel = false;
        self.set_navigating(true);
        self.recompute_path();
        Ok(())
    }

    /// Drop the selected destination. The path empties with it and
    /// navigation stops.
    pub fn clear_destination(&mut self) {
        self.destination = None;
        self.set_navigating(false);
        self.recompute_path();
    }

    /// Turn the navigation flag on or off. Drift runs only while on; turning
    /// it off cancels the recurring tick immediately.
    pub fn set_navigating(&mut self, on: bool) {
        self.is_navigating = on;
        if on {
            self.drift.arm(self.clock_ms);
        } else {
            self.drift.cancel();
        }
    }

    /// Start a relocation scan. The new position commits after the
    /// acquisition latency, on a later `advance`. A scan already in flight
    /// is superseded.
    pub fn relocate_user(&mut self) {
        if let Some(mut scan) = self.pending_scan.take() {
            scan.cancel();
        }
        let scan = match self.scan_seed {
            Some(seed) => {
                // Derive a fresh stream per scan so replays stay stable
                self.scan_seed = Some(seed.wrapping_add(1));
                ScanTask::with_seed(self.clock_ms, seed)
            }
            None => ScanTask::new(self.clock_ms),
        };
        self.pending_scan = Some(scan);
    }

    /// Switch interaction mode from the dock.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        match mode {
            Mode::Qr => self.relocate_user(),
            Mode::Map => self.show_panel = true,
            Mode::Navigate => {
                if self.destination.is_none() {
                    self.show_panel = true;
                }
            }
            Mode::Compass | Mode::Settings => {}
        }
    }

    pub fn close_panel(&mut self) {
        self.show_panel = false;
    }

    /// Tear the engine down: cancel all scheduled work so nothing fires
    /// against discarded state.
    pub fn shutdown(&mut self) {
        self.drift.cancel();
        if let Some(mut scan) = self.pending_scan.take() {
            scan.cancel();
        }
        self.is_navigating = false;
    }

    // ---- Clock ---------------------------------------------------------

    /// Advance the logical clock and drain due timer work. Drift ticks and a
    /// completed scan commit together with their path recompute before this
    /// returns, so a snapshot taken afterwards is always internally
    /// consistent. Returns the number of position mutations committed.
    pub fn advance(&mut self, now_ms: u64) -> u32 {
        self.clock_ms = self.clock_ms.max(now_ms);
        let mut mutations = 0;

        if self.is_navigating {
            for step in self.drift.poll(self.clock_ms) {
                self.user_position.x += step.dx;
                self.user_position.z += step.dz;
                mutations += 1;
            }
        }

        let committed_scan = self
            .pending_scan
            .as_mut()
            .and_then(|scan| scan.poll(self.clock_ms));
        if let Some(position) = committed_scan {
            self.pending_scan = None;
            self.user_position = position;
            self.ar_connected = true;
            debug!("scan relocated user to ({}, {}, {})", position.x, position.y, position.z);
            mutations += 1;
        }

        if mutations > 0 {
            self.recompute_path();
        }
        mutations
    }

    // ---- Outbound state ------------------------------------------------

    pub fn user_position(&self) -> Position3 {
        self.user_position
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    pub fn is_navigating(&self) -> bool {
        self.is_navigating
    }

    pub fn path(&self) -> &[Position3] {
        &self.path
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn catalog(&self) -> &DestinationCatalog {
        &self.catalog
    }

    pub fn scan_pending(&self) -> bool {
        self.pending_scan.as_ref().is_some_and(|s| s.is_pending())
    }

    /// 3D Euclidean distance to the destination; zero when none is selected.
    pub fn distance_to_destination(&self) -> f64 {
        match &self.destination {
            Some(d) => self.user_position.distance_to(&d.position),
            None => 0.0,
        }
    }

    /// Distance formatted for the status bar, one decimal with unit suffix.
    pub fn distance_display(&self) -> String {
        format!("{:.1}m", self.distance_to_destination())
    }

    /// Atomic read-only view for renderers.
    pub fn snapshot(&self) -> NavSnapshot {
        NavSnapshot {
            user_position: self.user_position,
            destination: self.destination.clone(),
            is_navigating: self.is_navigating,
            path: self.path.clone(),
            distance_to_destination: self.distance_to_destination(),
            mode: self.mode,
            show_panel: self.show_panel,
            ar_connected: self.ar_connected,
        }
    }

    /// Screen anchor of the user marker.
    pub fn user_anchor(&self) -> ScreenAnchor {
        self.projector.project(self.user_position)
    }

    /// Screen polyline of the current path; empty when no destination.
    pub fn path_anchors(&self) -> Vec<ScreenAnchor> {
        self.projector.project_path(&self.path)
    }

    /// Waypoints between the endpoints, where the renderer places direction
    /// arrows.
    pub fn intermediate_waypoints(&self) -> &[Position3] {
        if self.path.len() <= 2 {
            &[]
        } else {
            &self.path[1..self.path.len() - 1]
        }
    }

    pub fn projector(&self) -> &ScreenProjector {
        &self.projector
    }

    // ---- Internals -----------------------------------------------------

    fn recompute_path(&mut self) {
        self.path = match &self.destination {
            Some(d) => generate_path(self.user_position, d.position, PATH_STEPS)
                .expect("PATH_STEPS is at least 1"),
            None => Vec::new(),
        };
        debug_assert_eq!(self.path.is_empty(), self.destination.is_none());
    }
}

impl Drop for NavigationEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}
