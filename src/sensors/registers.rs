//! BH1730 寄存器映射与命令帧位定义，与芯片的线上协议逐位一致

/// 命令字节必须携带的固定标志位
pub const CMD_MAGIC: u8 = 0x80;
/// 设置寄存器指针（自动递增模式）
pub const CMD_SETADDR: u8 = 0x00;
/// 特殊命令前缀，低位为具体操作码
pub const CMD_SPECCMD: u8 = 0x60;

pub const SPECCMD_INTRESET: u8 = 0x01;
pub const SPECCMD_STOPMEAS: u8 = 0x02;
pub const SPECCMD_STARTMEAS: u8 = 0x03;
pub const SPECCMD_RESET: u8 = 0x04;

/// 控制寄存器各标志位
pub const CTL_ADC_INTR: u8 = 0x20;
pub const CTL_ADC_VALID: u8 = 0x10;
pub const CTL_ONE_TIME: u8 = 0x08;
pub const CTL_DATA_SEL: u8 = 0x04;
pub const CTL_ADC_EN: u8 = 0x02;
pub const CTL_POWER: u8 = 0x01;

/// ID 寄存器高 4 位的期望值
pub const PART_ID: u8 = 0x70;
pub const PART_ID_MASK: u8 = 0xF0;

/// 芯片寄存器地址
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    Control = 0x00,
    Timing = 0x01,
    Interrupt = 0x02,
    ThresholdLowLow = 0x03,
    ThresholdLowHigh = 0x04,
    ThresholdHighLow = 0x05,
    ThresholdHighHigh = 0x06,
    Gain = 0x07,
    Id = 0x12,
    Data0Low = 0x14,
    Data0High = 0x15,
    Data1Low = 0x16,
    Data1High = 0x17,
}

impl Register {
    /// 寄存器偏移地址
    #[inline]
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// 指向该寄存器的命令字节：地址 | 固定标志 | 自动递增模式
    #[inline]
    pub const fn command(self) -> u8 {
        self.addr() | CMD_MAGIC | CMD_SETADDR
    }
}

/// 软复位命令字节
pub const fn reset_command() -> u8 {
    CMD_MAGIC | CMD_SPECCMD | SPECCMD_RESET
}

/// 单次测量触发值：上电 + 使能 ADC + 单次模式
pub const fn one_shot_control() -> u8 {
    CTL_POWER | CTL_ADC_EN | CTL_ONE_TIME
}
