//! Desktop simulator for the heatview heating monitor.
//!
//! Feeds heatview-core with synthetic (or replayed) serial sensor traffic and
//! a fake CPU temperature tick, then renders every page to disk once per tick
//! so the output can be opened in a browser without the sensor board.
//!
//! # Environment
//!
//! | Variable                | Meaning                                  |
//! |-------------------------|------------------------------------------|
//! | `HEATVIEW_TEMPLATE_DIR` | Page skeletons (default: `templates/`)   |
//! | `HEATVIEW_OUTPUT_DIR`   | Rendered pages (default: `heatview-out`) |
//! | `HEATVIEW_TICKS`        | Ticks to run, `0` = forever (default 60) |
//! | `HEATVIEW_TICK_MS`      | Tick period (default 1000)               |
//! | `HEATVIEW_SERIAL_LOG`   | Serial capture to replay                 |
//! | `HEATVIEW_CONFIG`       | JSON rendering config                    |
//!
//! `RUST_LOG` controls log verbosity.

mod settings;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, error, info, warn};

use heatview_core::pages::{PageId, PageManager, assemble_page};
use heatview_core::sensors::{Channel, SERIAL_SENSOR_COUNT, SensorReading};
use heatview_core::storage::{EventChannel, Relay, TelemetryEvent, TelemetryStore};

use settings::Settings;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Shared page chrome wrapped around every HTML page
const HEADER_TEMPLATE: &str = "header.html";
const FOOTER_TEMPLATE: &str = "footer.html";

/// The control surface flips the pump every this many ticks.
const PUMP_TOGGLE_TICKS: u64 = 15;

/// The control surface flips the burner every this many ticks.
const BURNER_TOGGLE_TICKS: u64 = 25;

/// Serial lines sent per tick, one per sensor.
const LINES_PER_TICK: usize = SERIAL_SENSOR_COUNT;

/// Queue shared by the sensor side and the renderer.
static EVENTS: EventChannel = EventChannel::new();

// ---------------------------------------------------------------------------
// Mock data generation
// ---------------------------------------------------------------------------

/// Generates synthetic serial lines and CPU reports that vary over time.
struct MockSensorGenerator {
    /// Ticks generated so far, used as the fake clock.
    tick: u64,
}

impl MockSensorGenerator {
    fn new() -> Self {
        Self { tick: 0 }
    }

    /// Advance one tick and return the serial lines the board would send.
    ///
    /// The board reports whole degrees.
    fn next_lines(&mut self) -> Vec<String> {
        self.tick += 1;
        let t = self.tick as f64;

        // Outside: -5..15 °C, slow day cycle
        let outside = 5.0 + 10.0 * (t / 240.0).sin();

        // Storage tank: stratified, top hottest, slowly charging and discharging
        let charge = 10.0 * (t / 90.0).sin();
        let top = 65.0 + charge;
        let mid = 48.0 + 0.8 * charge + 2.0 * (t / 17.0).cos();
        let bot = 30.0 + 0.5 * charge;

        // Flow towards the heating circuit follows the top layer
        let flow = top - 12.0 + 3.0 * (t / 11.0).sin();

        [outside, top, mid, bot, flow]
            .iter()
            .enumerate()
            .map(|(index, value)| format!("{}: {}", index, value.round() as i32))
            .collect()
    }

    /// CPU temperature report in the format of the firmware tool.
    fn cpu_report(&self) -> String {
        let t = self.tick as f64;
        let temp = 47.0 + 4.0 * (t / 30.0).sin() + 0.5 * (t / 7.0).cos();
        format!("temp={:.1}'C\n", temp)
    }
}

/// Replays a recorded serial capture, looping at the end.
struct SerialReplay {
    lines: Vec<String>,
    position: usize,
}

impl SerialReplay {
    fn load(path: &Path) -> std::io::Result<Self> {
        let replay = Self::from_capture(&fs::read_to_string(path)?);
        info!(
            "Replaying {} serial lines from {}",
            replay.lines.len(),
            path.display()
        );
        Ok(replay)
    }

    /// Build from captured text, skipping blank lines.
    fn from_capture(capture: &str) -> Self {
        let lines = capture
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_owned)
            .collect();
        Self { lines, position: 0 }
    }

    fn next_lines(&mut self) -> Vec<String> {
        if self.lines.is_empty() {
            return Vec::new();
        }
        (0..LINES_PER_TICK)
            .map(|_| {
                let line = self.lines[self.position].clone();
                self.position = (self.position + 1) % self.lines.len();
                line
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Ingestion
// ---------------------------------------------------------------------------

/// Parse and enqueue one serial line; bad lines are logged and dropped.
fn post_serial_line(line: &str) {
    debug!("serial: {}", line.trim_end());
    match SensorReading::parse_serial_line(line) {
        Ok(reading) => post(TelemetryEvent::Sample(reading)),
        Err(e) => warn!("Rejected serial line {:?}: {}", line, e),
    }
}

fn post_cpu_report(report: &str) {
    match SensorReading::parse_cpu_report(report) {
        Ok(reading) => post(TelemetryEvent::Sample(reading)),
        Err(e) => warn!("Rejected CPU report {:?}: {}", report, e),
    }
}

fn post(event: TelemetryEvent) {
    if EVENTS.try_send(event).is_err() {
        warn!("Event queue full, dropping {:?}", event);
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn read_template(dir: &Path, name: &str) -> std::io::Result<String> {
    fs::read_to_string(dir.join(name))
}

/// Skeleton of a page, with header and footer attached where needed.
fn load_page(dir: &Path, page: PageId) -> std::io::Result<String> {
    let body = read_template(dir, page.template_name())?;
    if !page.uses_page_chrome() {
        return Ok(body);
    }
    let header = read_template(dir, HEADER_TEMPLATE)?;
    let footer = read_template(dir, FOOTER_TEMPLATE)?;
    Ok(assemble_page(&header, &body, &footer))
}

/// Render every page into the output directory.
///
/// Skeletons are re-read each time so they can be edited while running.
fn render_pages(
    settings: &Settings,
    manager: &mut PageManager,
    store: &TelemetryStore,
) -> std::io::Result<()> {
    for page in PageId::ALL {
        let skeleton = load_page(&settings.template_dir, page)?;
        let rendered = manager.render(page, &skeleton, store);
        let target: PathBuf = settings.output_dir.join(page.template_name());
        fs::write(&target, rendered)?;
        debug!("Wrote {} ({})", target.display(), page.content_type());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    env_logger::init();
    info!("Starting heatview simulator");

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Invalid settings: {}", e);
            std::process::exit(1);
        }
    };

    let mut manager = match PageManager::new(&settings.config) {
        Ok(manager) => manager,
        Err(e) => {
            error!("Invalid rendering config: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = fs::create_dir_all(&settings.output_dir) {
        error!(
            "Cannot create output directory {}: {}",
            settings.output_dir.display(),
            e
        );
        std::process::exit(1);
    }

    info!(
        "Templates: {}  Output: {}  Tick: {:?}",
        settings.template_dir.display(),
        settings.output_dir.display(),
        settings.tick
    );

    let mut sensor_gen = MockSensorGenerator::new();
    let mut replay = match &settings.serial_log {
        Some(path) => match SerialReplay::load(path) {
            Ok(replay) => Some(replay),
            Err(e) => {
                warn!("Cannot read serial log {}: {}, using synthetic data", path.display(), e);
                None
            }
        },
        None => None,
    };

    let mut store = TelemetryStore::new();
    let mut tick: u64 = 0;

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    loop {
        let tick_start = Instant::now();
        tick += 1;

        // --- Serial traffic -----------------------------------------------
        let lines = match replay.as_mut() {
            Some(replay) => replay.next_lines(),
            None => sensor_gen.next_lines(),
        };
        for line in &lines {
            post_serial_line(line);
        }

        // --- Periodic CPU tick --------------------------------------------
        post_cpu_report(&sensor_gen.cpu_report());

        // --- Control surface ----------------------------------------------
        if tick % PUMP_TOGGLE_TICKS == 0 {
            post(TelemetryEvent::ToggleRelay(Relay::Pump));
        }
        if tick % BURNER_TOGGLE_TICKS == 0 {
            post(TelemetryEvent::ToggleRelay(Relay::Burner));
        }

        // --- Apply and render ---------------------------------------------
        let applied = store.drain(&EVENTS);
        debug!("Tick {}: applied {} events", tick, applied);

        if let Err(e) = render_pages(&settings, &mut manager, &store) {
            error!("Render error: {}", e);
        }

        if let Some(latest) = store.latest(Channel::StorageTop) {
            info!(
                "Tick {}: storage top {} °C, {} samples total",
                tick,
                latest,
                store.total_samples()
            );
        }

        if settings.ticks.is_some_and(|limit| tick >= u64::from(limit)) {
            break;
        }

        // --- Tick pacing --------------------------------------------------
        let elapsed = tick_start.elapsed();
        if elapsed < settings.tick {
            std::thread::sleep(settings.tick - elapsed);
        }
    }

    info!("Simulator exiting");
}
