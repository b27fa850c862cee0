//! 驱动错误类型：区分总线故障、身份校验失败与转换超时

use core::fmt;

/// BH1730 操作过程中可能出现的错误，`E` 为底层 I2C 总线的错误类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// 总线读写失败（NACK、总线忙、硬件故障等），不做重试
    Transport(E),
    /// ID 寄存器高 4 位不是 0x7，携带实际读到的字节
    IdentityMismatch(u8),
    /// 轮询预算耗尽，ADC 有效位始终未置位
    ConversionTimeout,
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Transport(err)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "I2C transport error: {:?}", err),
            Error::IdentityMismatch(id) => {
                write!(f, "unexpected identity value 0x{:02X}, expected 0x7x", id)
            }
            Error::ConversionTimeout => f.write_str("conversion did not complete in time"),
        }
    }
}
