//! Integration tests for the capture side of the wire protocol.
//!
//! Events captured on the host are encoded, and the byte stream is decoded
//! and applied the way the adapter does it.

use keybridge::capture::wire_event;
use keybridge::{Adapter, SimulatedChip, VirtualDelay};
use keybridge_input::{WireDecoder, WireEvent};
use keybridge_matrix::keycodes::*;
use keybridge_matrix::targets::{spectrum, SPECTRUM};
use keybridge_matrix::{ChipModel, Mt88xx};

use evdev::{EventType, InputEvent};

fn key(code: u8, value: i32) -> InputEvent {
    InputEvent::new(EventType::KEY, u16::from(code), value)
}

/// What `capture` would write for a list of input events
fn captured(events: &[InputEvent]) -> Vec<u8> {
    events
        .iter()
        .filter_map(wire_event)
        .flat_map(|e| e.encode())
        .collect()
}

#[test]
fn capture_stream_decodes_back() {
    let bytes = captured(&[
        key(KEY_LEFTSHIFT, 1),
        key(KEY_H, 1),
        key(KEY_H, 2),
        key(KEY_H, 2),
        InputEvent::new(EventType::SYNCHRONIZATION, 0, 0),
        key(KEY_H, 0),
        key(KEY_LEFTSHIFT, 0),
    ]);
    // repeats and sync events are not forwarded
    assert_eq!(bytes.len(), 8);

    let mut decoder = WireDecoder::new();
    let decoded: Vec<WireEvent> = bytes
        .iter()
        .filter_map(|&b| decoder.push(b).unwrap())
        .collect();
    assert_eq!(
        decoded,
        vec![
            WireEvent::press(KEY_LEFTSHIFT),
            WireEvent::press(KEY_H),
            WireEvent::release(KEY_H),
            WireEvent::release(KEY_LEFTSHIFT),
        ]
    );
}

#[test]
fn held_key_survives_repeats() {
    let model = ChipModel::Mt8808;
    let switch = Mt88xx::new(SimulatedChip::new(model), VirtualDelay::default(), model);
    let mut adapter = Adapter::new(&SPECTRUM, switch, VirtualDelay::default(), false);
    adapter.reset();

    adapter.feed_serial(&captured(&[key(KEY_SPACE, 1), key(KEY_SPACE, 2)]));
    assert!(adapter.keyboard().is_closed(spectrum::SPACE));

    // stream split in the middle of a frame
    let release = captured(&[key(KEY_SPACE, 0)]);
    adapter.feed_serial(&release[..1]);
    assert!(adapter.keyboard().is_closed(spectrum::SPACE));
    adapter.feed_serial(&release[1..]);
    assert!(adapter.keyboard().state().is_all_open());
}
