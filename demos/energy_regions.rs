//! Organize per-event histograms by energy bin and detector region
//!
//! Run with `RUST_LOG=debug` to see histograms being created on demand.

use std::sync::Arc;

use anyhow::Result;
use histogram_collections::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Running summary of the values filled into one slot
#[derive(Debug, Default, Clone)]
struct Summary {
    entries: u64,
    sum: f64,
}

impl Summary {
    fn fill(&mut self, value: f64) {
        self.entries += 1;
        self.sum += value;
    }

    fn mean(&self) -> f64 {
        if self.entries == 0 {
            0.0
        } else {
            self.sum / self.entries as f64
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let eta = RegionTable::new()
        .with_region("barrel", |eta: &f64| eta.abs() < 1.48)
        .with_region("endcap", |eta: &f64| eta.abs() >= 1.48 && eta.abs() < 3.0)
        .with_region("central", |eta: &f64| eta.abs() < 3.0)
        .with_region("forward", |eta: &f64| eta.abs() >= 3.0);

    let energy = Dimension::sorted(vec![0.0, 20.0, 40.0, 80.0, 160.0])?;
    let region = Dimension::region(Arc::new(eta));
    let mut hists = HistogramCollection::new(vec![energy, region], Summary::default)?;
    info!(shape = ?hists.shape(), "collection ready");

    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10_000 {
        let energy: f64 = rng.gen_range(-5.0..200.0);
        let eta: f64 = rng.gen_range(-5.0..5.0);
        let pt: f64 = rng.gen_range(0.0..100.0);

        // Central overlaps barrel/endcap, so most events land in two slots
        hists.fill_with([energy, eta], |summary| summary.fill(pt))?;
    }

    for (key, summary) in &hists {
        println!(
            "{:>22}  entries={:>5}  mean pt={:.2}",
            key.to_string(),
            summary.entries,
            summary.mean()
        );
    }
    Ok(())
}
