//! 传感器模块集合：BH1730 驱动、寄存器定义与照度换算

pub mod bh1730;
pub mod lux;
pub mod registers;

use lux::Channels;

/// 一次测量的结果，同时保留原始通道值便于诊断
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightReading {
    pub channels: Channels,
    pub lux: f32,
}
