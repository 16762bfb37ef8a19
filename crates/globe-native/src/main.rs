use std::thread;
use std::time::Duration;

use instant::Instant;

use globe_core::{
    default_events, AudioSink, BeepRequest, GlobeSession, SessionConfig, Viewport,
};

/// Headless audio sink: synthesis is out of scope here, so requested beeps
/// are surfaced as log lines with their envelope parameters.
struct LogBeeper;

impl AudioSink for LogBeeper {
    fn beep(&mut self, request: BeepRequest) {
        log::info!(
            "[audio] beep {:.0} Hz, decay {} ms",
            request.frequency_hz,
            request.decay.as_millis()
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let viewport = Viewport::new(960.0, 540.0);
    let mut session = GlobeSession::new(SessionConfig::new(default_events(), viewport, 42))?;
    // No gesture to wait for in a headless run
    session.enable_audio();

    let mut sink = LogBeeper;
    let frame_interval = Duration::from_millis(16);
    let run_for = run_duration();
    let started = Instant::now();
    let mut frames: u64 = 0;
    let mut timeline_seen = session.timeline().len();

    while started.elapsed() < run_for {
        let snapshot = session.advance_realtime();
        for beep in &snapshot.beeps {
            sink.beep(*beep);
        }

        // Surface new timeline rows as they appear (newest first)
        let len = session.timeline().len();
        if len > timeline_seen {
            for entry in session.timeline().entries().take(len - timeline_seen) {
                let event = &session.events()[entry.event_index];
                log::info!("[timeline] {}", entry.row_text(event));
            }
            timeline_seen = len;
        }

        frames += 1;
        if frames % 300 == 0 {
            log::info!(
                "[frame {frames}] rotation {:.3} rad, strobe {:.1}, bars {:?}",
                snapshot.rotation_y,
                snapshot.strobe_opacity,
                snapshot.bars
            );
        }
        thread::sleep(frame_interval);
    }

    log::info!("{frames} frames over {:?}", started.elapsed());
    Ok(())
}

/// Run length in seconds from the first CLI argument, default 30.
fn run_duration() -> Duration {
    std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(30))
}
