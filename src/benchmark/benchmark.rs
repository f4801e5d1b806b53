use std::time::Instant;

use log::info;

use crate::error::SimError;
use crate::simulation::engine::PhysicsEngine;
use crate::simulation::entity::{EntityKind, Shape};
use crate::simulation::params::Parameters;

/// Helper to build an engine with `n` points inside a keep-inside box
fn make_engine(n: usize, spatial_index: bool) -> Result<PhysicsEngine, SimError> {
    let params = Parameters {
        spatial_index,
        ..Parameters::default()
    };
    let mut engine = PhysicsEngine::new(params)?;

    // Box sized so density stays roughly constant as n grows
    let side = 40.0 * (n as f64).sqrt();
    engine.insert(Shape::rect(0.0, 0.0, side, side), EntityKind::Bound, true)?;

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = (i_f * 0.37).sin() * side * 0.45;
        let y = (i_f * 0.13).cos() * side * 0.45;
        engine.insert(Shape::circle(x, y, 5.0), EntityKind::Point, false)?;
    }

    Ok(engine)
}

/// Time `advance` for brute force vs grid over a few system sizes
pub fn bench_advance() -> Result<(), SimError> {
    let ns = [100, 200, 400, 800, 1600];
    let frames = 2;
    let sub_steps = 5;

    for n in ns {
        let mut brute = make_engine(n, false)?;
        let mut grid = make_engine(n, true)?;

        // Warm-up
        brute.advance(1)?;
        grid.advance(1)?;

        let t0 = Instant::now();
        for _ in 0..frames {
            brute.advance(sub_steps)?;
        }
        let brute_per_frame = t0.elapsed().as_secs_f64() / frames as f64;

        let t1 = Instant::now();
        for _ in 0..frames {
            grid.advance(sub_steps)?;
        }
        let grid_per_frame = t1.elapsed().as_secs_f64() / frames as f64;

        info!(
            "N = {:5}, brute frame = {:8.6} s, grid frame = {:8.6} s",
            n, brute_per_frame, grid_per_frame
        );
    }
    Ok(())
}

/// Per-frame cost for brute force and grid as CSV
/// Paste output directly into a spreadsheet to graph
pub fn bench_advance_curve() -> Result<(), SimError> {
    println!("N,brute_ms,grid_ms");

    for n in (100..=2000).step_by(100) {
        // Large n: single frame to keep runtime sane
        let frames = if n <= 500 { 3 } else { 1 };

        let mut brute = make_engine(n, false)?;
        let t0 = Instant::now();
        for _ in 0..frames {
            brute.advance(1)?;
        }
        let ms_brute = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        let mut grid = make_engine(n, true)?;
        let t1 = Instant::now();
        for _ in 0..frames {
            grid.advance(1)?;
        }
        let ms_grid = t1.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        println!("{},{:.6},{:.6}", n, ms_brute, ms_grid);
    }
    Ok(())
}
