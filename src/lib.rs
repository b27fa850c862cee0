//! Rohm BH1730 环境光传感器的阻塞式驱动，基于 `embedded-hal` 1.0 的 `I2c` 与 `DelayNs`。
//!
//! 驱动流程：校验 ID 寄存器并软复位，之后每次测量依次触发单次转换、
//! 以 20 ms 间隔轮询有效位（最多 100 次）、读取两路原始计数并按数据手册的分段公式换算为 Lux。
//!
//! ```ignore
//! let mut sensor = Bh1730::new(i2c, delay, DEFAULT_ADDRESS)?;
//! let lux = sensor.read_lux()?;
//! ```
//!
//! 诊断信息通过 `log` 输出；启用 `defmt` 特性后公开类型同时实现 `defmt::Format`。

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod compat;
pub mod error;
pub mod sensors;

pub use error::Error;
pub use sensors::bh1730::{Bh1730, DEFAULT_ADDRESS, POLL_ATTEMPTS, POLL_INTERVAL_MS};
pub use sensors::lux::{calculate_lux, Channels};
pub use sensors::LightReading;
