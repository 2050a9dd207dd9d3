//! Wire byte replay

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use keybridge::{Adapter, BridgeConfig, Chip, SimulatedChip, Target, VirtualDelay};
use keybridge_matrix::{ChipModel, Mt88xx};
use tracing::info;

use super::CommandResult;

pub fn run(
    config: &BridgeConfig,
    file: Option<PathBuf>,
    target: Option<Target>,
    chip: Option<Chip>,
    steps: bool,
) -> CommandResult {
    let bytes = match &file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Reading {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Reading stdin")?;
            buf
        }
    };

    let layout = target.unwrap_or(config.target).layout();
    let model = ChipModel::from(chip.unwrap_or(config.chip));
    let switch = Mt88xx::new(SimulatedChip::new(model), VirtualDelay::default(), model);
    let mut adapter = Adapter::new(layout, switch, VirtualDelay::default(), config.joystick);
    adapter.keyboard_mut().set_timing(config.timing.into());
    adapter.reset();

    info!("Replaying {} bytes on {} with {}", bytes.len(), layout.name, model.name());
    if steps {
        for &byte in &bytes {
            let before = adapter.keyboard().state().clone();
            adapter.feed_serial(&[byte]);
            if adapter.keyboard().state() != &before {
                println!("{}", adapter.keyboard().state());
            }
        }
    } else {
        adapter.feed_serial(&bytes);
    }

    let keyboard = adapter.into_keyboard();
    let (switch, delay) = keyboard.into_parts();
    let (chip, _) = switch.into_parts();

    println!("{}", chip.logical_state());
    println!("Target time elapsed: {} ms", delay.elapsed_ms());
    Ok(())
}
