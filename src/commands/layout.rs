//! Key map listing

use keybridge::{BridgeConfig, Target};
use keybridge_matrix::keycodes;
use keybridge_matrix::{ChipModel, Key, Stroke};

use super::CommandResult;

pub fn run(config: &BridgeConfig, target: Option<Target>, all: bool) -> CommandResult {
    let layout = target.unwrap_or(config.target).layout();
    let chip = ChipModel::from(config.chip);

    println!("Target: {} ({} entries)", layout.name, layout.keymap.len());
    match layout.validate(chip) {
        Ok(()) => println!("Fits {}", chip.name()),
        Err(e) => println!("Problem with {}: {}", chip.name(), e),
    }
    println!();
    println!("{:>4}  {:<18} MAPS TO", "CODE", "INPUT KEY");

    for code in 0..layout.keymap.len() as u8 {
        let name = keycodes::name(code).unwrap_or("?");
        match layout.translate(code) {
            Some(key) => println!("{:>4}  {:<18} {}", code, name, describe(key)),
            None if all => println!("{:>4}  {:<18} -", code, name),
            None => {}
        }
    }

    println!();
    println!("Joystick (up, down, left, right, trigger):");
    for key in layout.joystick {
        match key {
            Some(key) => println!("  {}", describe(key)),
            None => println!("  -"),
        }
    }
    Ok(())
}

/// Key plus the crosspoints it touches
fn describe(key: Key) -> String {
    match key {
        Key::Plain(_) => key.to_string(),
        Key::Combo(combo) => {
            let members: Vec<String> = combo.keys.iter().map(|a| a.to_string()).collect();
            format!("{} [{}]", key, members.join(" + "))
        }
        Key::Macro(m) => {
            let strokes: Vec<String> = m
                .strokes
                .iter()
                .map(|&s| match s {
                    Stroke::Plain(a) => a.to_string(),
                    Stroke::Combo(c) => c.name.to_string(),
                })
                .collect();
            format!("{} [{}]", key, strokes.join(", "))
        }
    }
}
