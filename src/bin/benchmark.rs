//! Headless benchmark: run the simulation without a window and report how long
//! the kinematics tick and the repulsion pass take.
//!
//! Usage: `benchmark [extra_blobs] [frames]`

use std::time::{Duration, Instant};

use bevy::math::Vec2;
use blob_background::background::{BlobPreset, Simulation, Viewport};

const DEFAULT_EXTRA_BLOBS: usize = 40;
const DEFAULT_FRAMES: usize = 10_000;
const FRAME_DT: f32 = 1.0 / 60.0;

#[cfg_attr(feature = "profile", derive(serde::Serialize))]
struct Report {
    blobs: usize,
    frames: usize,
    tick_total_ms: f64,
    repulsion_total_ms: f64,
    tick_us_per_frame: f64,
    repulsion_us_per_frame: f64,
}

fn arg_or(index: usize, default: usize) -> usize {
    std::env::args()
        .nth(index)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() {
    let extra = arg_or(1, DEFAULT_EXTRA_BLOBS);
    let frames = arg_or(2, DEFAULT_FRAMES).max(1);

    let mut sim: Simulation<()> =
        Simulation::new(Viewport::new(1920.0, 1080.0), (), 0xB10B).with_preset(BlobPreset::Full, |_| ());
    for _ in 0..extra {
        sim.spawn_random_blob(());
    }

    let mut tick_time = Duration::ZERO;
    let mut repulsion_time = Duration::ZERO;

    for frame in 0..frames {
        // Sweep the pointer around so the mouse blob has work to do
        let t = frame as f32 * FRAME_DT;
        sim.set_mouse_target(Vec2::new(960.0 + 400.0 * t.cos(), 540.0 + 300.0 * t.sin()));

        let start = Instant::now();
        sim.tick(FRAME_DT);
        tick_time += start.elapsed();

        let start = Instant::now();
        sim.repulsion_pass(FRAME_DT);
        repulsion_time += start.elapsed();
    }

    let report = Report {
        blobs: sim.blobs().len(),
        frames,
        tick_total_ms: tick_time.as_secs_f64() * 1e3,
        repulsion_total_ms: repulsion_time.as_secs_f64() * 1e3,
        tick_us_per_frame: tick_time.as_secs_f64() * 1e6 / frames as f64,
        repulsion_us_per_frame: repulsion_time.as_secs_f64() * 1e6 / frames as f64,
    };

    print_report(&report);
}

#[cfg(feature = "profile")]
fn print_report(report: &Report) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to serialize report: {e}"),
    }
}

#[cfg(not(feature = "profile"))]
fn print_report(report: &Report) {
    println!("blobs: {}, frames: {}", report.blobs, report.frames);
    println!(
        "tick:      {:>10.3} ms total, {:>8.3} us/frame",
        report.tick_total_ms, report.tick_us_per_frame
    );
    println!(
        "repulsion: {:>10.3} ms total, {:>8.3} us/frame",
        report.repulsion_total_ms, report.repulsion_us_per_frame
    );
}
