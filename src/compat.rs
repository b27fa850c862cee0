//! 兼容接口：创建失败返回 `None`，读数失败返回负数哨兵值
//!
//! 具体失败原因只记录在日志中，需要区分错误类型时请直接使用 [`Bh1730`]。

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::sensors::bh1730::Bh1730;

/// 读数失败时返回的哨兵值，有效照度总是非负
pub const READ_FAILURE: f32 = -1.0;

/// 创建并校验设备，任何失败都返回 `None`
pub fn init<I2C, D>(i2c: I2C, delay: D, address: u8) -> Option<Bh1730<I2C, D>>
where
    I2C: I2c,
    D: DelayNs,
{
    Bh1730::new(i2c, delay, address).ok()
}

/// 读取照度，失败时返回 [`READ_FAILURE`]
///
/// 成功读数截断到 0 以上：比值略低于 2.13 时公式结果为负，不能与哨兵值混淆。
pub fn read_lux<I2C, D>(dev: &mut Bh1730<I2C, D>) -> f32
where
    I2C: I2c,
    D: DelayNs,
{
    dev.read_lux().map(|lux| lux.max(0.0)).unwrap_or(READ_FAILURE)
}

/// 释放设备句柄
pub fn free<I2C, D>(dev: Bh1730<I2C, D>) {
    drop(dev);
}

#[cfg(test)]
mod tests {
    use super::*;

    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x29;

    #[test]
    fn init_returns_none_for_wrong_id() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x92]),
            I2cTransaction::read(ADDR, vec![0x55]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        assert!(init(&mut i2c, NoopDelay::new(), ADDR).is_none());
        i2c.done();
    }

    #[test]
    fn read_lux_reports_sentinel_on_failure() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x92]),
            I2cTransaction::read(ADDR, vec![0x71]),
            I2cTransaction::write(ADDR, vec![0xE4]),
            I2cTransaction::write(ADDR, vec![0x80, 0x0B]).with_error(ErrorKind::Other),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut dev = init(&mut i2c, NoopDelay::new(), ADDR).unwrap();
        assert_eq!(read_lux(&mut dev), READ_FAILURE);
        free(dev);
        i2c.done();
    }

    #[test]
    fn read_lux_returns_measurement() {
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x92]),
            I2cTransaction::read(ADDR, vec![0x71]),
            I2cTransaction::write(ADDR, vec![0xE4]),
            I2cTransaction::write(ADDR, vec![0x80, 0x0B]),
            I2cTransaction::write(ADDR, vec![0x80]),
            I2cTransaction::read(ADDR, vec![0x1B]),
            I2cTransaction::write(ADDR, vec![0x94]),
            I2cTransaction::read(ADDR, vec![0x00]),
            I2cTransaction::write(ADDR, vec![0x95]),
            I2cTransaction::read(ADDR, vec![0x00]),
            I2cTransaction::write(ADDR, vec![0x96]),
            I2cTransaction::read(ADDR, vec![0x10]),
            I2cTransaction::write(ADDR, vec![0x97]),
            I2cTransaction::read(ADDR, vec![0x00]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut dev = init(&mut i2c, NoopDelay::new(), ADDR).unwrap();
        assert_eq!(read_lux(&mut dev), 0.0);
        free(dev);
        i2c.done();
    }

    #[test]
    fn read_lux_never_reports_negative_success() {
        // data0 = 30000 (0x7530)，data1 = 63870 (0xF97E)，比值 2.129
        let expectations = [
            I2cTransaction::write(ADDR, vec![0x92]),
            I2cTransaction::read(ADDR, vec![0x71]),
            I2cTransaction::write(ADDR, vec![0xE4]),
            I2cTransaction::write(ADDR, vec![0x80, 0x0B]),
            I2cTransaction::write(ADDR, vec![0x80]),
            I2cTransaction::read(ADDR, vec![0x1B]),
            I2cTransaction::write(ADDR, vec![0x94]),
            I2cTransaction::read(ADDR, vec![0x30]),
            I2cTransaction::write(ADDR, vec![0x95]),
            I2cTransaction::read(ADDR, vec![0x75]),
            I2cTransaction::write(ADDR, vec![0x96]),
            I2cTransaction::read(ADDR, vec![0x7E]),
            I2cTransaction::write(ADDR, vec![0x97]),
            I2cTransaction::read(ADDR, vec![0xF9]),
        ];
        let mut i2c = I2cMock::new(&expectations);
        let mut dev = init(&mut i2c, NoopDelay::new(), ADDR).unwrap();
        assert_eq!(read_lux(&mut dev), 0.0);
        free(dev);
        i2c.done();
    }
}
