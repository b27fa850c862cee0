//! 原始通道值到照度（Lux）的换算，分段线性系数取自数据手册

/// 内部时钟周期（微秒，典型值）
pub const T_INT_US: f32 = 2.8;

/// 分段系数表：(比值上限, a, b)，比值严格小于上限时选用
const COEFFICIENTS: [(f32, f32, f32); 4] = [
    (0.26, 1.290, 2.733),
    (0.55, 0.795, 0.859),
    (1.09, 0.510, 0.345),
    (2.13, 0.276, 0.130),
];

/// 一次测量得到的两路光电二极管原始计数
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channels {
    /// 可见光 + 红外
    pub data0: u16,
    /// 红外
    pub data1: u16,
}

impl Channels {
    /// 由数据寄存器的低/高字节拼出 16 位计数
    pub fn from_bytes(data0_low: u8, data0_high: u8, data1_low: u8, data1_high: u8) -> Self {
        Self {
            data0: u16::from_le_bytes([data0_low, data0_high]),
            data1: u16::from_le_bytes([data1_low, data1_high]),
        }
    }

    /// 按给定的积分时间寄存器值与增益换算照度
    pub fn lux(&self, itime: u8, gain: u8) -> f32 {
        calculate_lux(self.data0, self.data1, gain, itime_to_itime_ms(itime))
    }
}

/// 积分时间寄存器值换算为毫秒
pub fn itime_to_itime_ms(itime: u8) -> f32 {
    (T_INT_US * 964.0 * (256.0 - itime as f32)) / 1000.0
}

/// 按通道比值选取系数对；比值 >= 2.13 时返回 `None`
pub fn coefficients(ratio: f32) -> Option<(f32, f32)> {
    COEFFICIENTS
        .iter()
        .find(|(limit, _, _)| ratio < *limit)
        .map(|&(_, a, b)| (a, b))
}

/// 分段公式计算照度
///
/// `data0` 为 0 时直接返回 0，避免除零；比值落在 2.13 及以上时没有对应公式，结果同样为 0。
pub fn calculate_lux(data0: u16, data1: u16, gain: u8, itime_ms: f32) -> f32 {
    if data0 == 0 {
        return 0.0;
    }
    let data0 = data0 as f32;
    let data1 = data1 as f32;
    match coefficients(data1 / data0) {
        Some((a, b)) => (a * data0 - b * data1) / gain as f32 * 102.6 / itime_ms,
        None => 0.0,
    }
}
