//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements     | Connects to                 |
//! |------------|----------------|-----------------------------|
//! | `hardware` | AnalogInput    | ESP32 ADC1 (thermistor)     |
//! |            | WaveformDriver | Fan GPIO via software PWM   |
//! |            | MonotonicClock | ESP32 system timer          |
//! | `log_sink` | StatusSink     | Serial log output           |
//! | `time`     | MonotonicClock | ESP32 system timer          |

pub mod hardware;
pub mod log_sink;
pub mod time;
