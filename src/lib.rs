//! keybridge: modern keyboards on vintage keyboard matrices
//!
//! Host side of the adapter plus the wiring that ties the engine, joystick
//! and front-ends together. The building blocks live in the member crates:
//! - `keybridge-matrix`: key tables, MT88xx driver and the matrix engine
//! - `keybridge-joystick`: joystick port mapping
//! - `keybridge-input`: serial and PS/2 front-ends

pub mod adapter;
pub mod capture;
pub mod config;
pub mod serial_port;
pub mod sim;

pub use adapter::Adapter;
pub use config::{BridgeConfig, Chip, Target};
pub use serial_port::{SerialPort, SerialPortError};
pub use sim::{SimulatedChip, VirtualDelay};
