//! BH1730 环境光传感器驱动：身份校验、软复位、单次测量与 Lux 换算

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use log::{debug, error, info};

use super::lux::{itime_to_itime_ms, Channels};
use super::registers::{self, Register, CTL_ADC_VALID, PART_ID, PART_ID_MASK};
use super::LightReading;
use crate::error::Error;

/// 传感器默认 I2C 地址
pub const DEFAULT_ADDRESS: u8 = 0x29;
/// 等待转换完成的最大轮询次数
pub const POLL_ATTEMPTS: u32 = 100;
/// 两次轮询之间的固定间隔（毫秒）
pub const POLL_INTERVAL_MS: u32 = 20;
/// 积分时间寄存器上电默认值
pub const RESET_INTEGRATION_TIME: u8 = 0xDA;
/// 增益上电默认值（x1）
pub const RESET_GAIN: u8 = 1;

/// BH1730 设备句柄
///
/// 句柄独占注入的总线与延时对象，所有总线操作都需要 `&mut self`，
/// 多个设备共用一条总线时由调用方负责串行化。
pub struct Bh1730<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    part_id: u8,
    integration_time_register: u8,
    gain_divisor: u8,
}

impl<I2C, D> Bh1730<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    /// 校验芯片身份并发出软复位，成功后返回可用的句柄
    ///
    /// 任一步骤失败都不会返回句柄。传入 `&mut I2C` 可在失败后继续使用总线。
    pub fn new(i2c: I2C, delay: D, address: u8) -> Result<Self, Error<I2C::Error>> {
        let mut dev = Self {
            i2c,
            delay,
            address,
            part_id: 0,
            integration_time_register: RESET_INTEGRATION_TIME,
            gain_divisor: RESET_GAIN,
        };

        let id = dev.read_register(Register::Id).map_err(|err| {
            error!("I2C read error: ID register at addr 0x{:X}: {:?}", address, err);
            Error::Transport(err)
        })?;
        if id & PART_ID_MASK != PART_ID {
            error!("unexpected identity value: expected 0x7x, got 0x{:X}", id);
            return Err(Error::IdentityMismatch(id));
        }
        dev.part_id = id;

        dev.write_command(registers::reset_command(), None)
            .map_err(|err| {
                error!("reset command error for addr 0x{:X}: {:?}", address, err);
                Error::Transport(err)
            })?;

        info!("Device at 0x{:X} initialized, ID=0x{:X}", address, id);
        Ok(dev)
    }

    /// 释放句柄，交还总线与延时对象，不产生总线访问
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    /// 设备的 7 位 I2C 地址
    pub fn address(&self) -> u8 {
        self.address
    }

    /// 构造时读到的 ID 字节：高 4 位为型号，低 4 位为版本
    pub fn part_id(&self) -> u8 {
        self.part_id
    }

    /// 积分时间寄存器的当前值（上电默认 0xDA）
    pub fn integration_time_register(&self) -> u8 {
        self.integration_time_register
    }

    /// 换算公式中的增益除数（上电默认 1）
    pub fn gain_divisor(&self) -> u8 {
        self.gain_divisor
    }

    /// 当前积分时间（毫秒）
    pub fn integration_time_ms(&self) -> f32 {
        itime_to_itime_ms(self.integration_time_register)
    }

    /// 执行一次完整测量并返回照度（Lux）
    pub fn read_lux(&mut self) -> Result<f32, Error<I2C::Error>> {
        self.measure().map(|reading| reading.lux)
    }

    /// 执行一次完整测量，同时返回原始通道值与照度
    pub fn measure(&mut self) -> Result<LightReading, Error<I2C::Error>> {
        let channels = self.read_channels()?;
        let lux = channels.lux(self.integration_time_register, self.gain_divisor);
        debug!("Lux reading {:.2} (data0={}, data1={})", lux, channels.data0, channels.data1);
        Ok(LightReading { channels, lux })
    }

    /// 触发单次测量、等待转换完成并读取两路原始计数
    pub fn read_channels(&mut self) -> Result<Channels, Error<I2C::Error>> {
        self.trigger_one_shot()
            .and_then(|_| self.wait_for_valid())
            .and_then(|_| self.read_data())
            .map_err(|err| {
                match &err {
                    Error::ConversionTimeout => {
                        error!("conversion timeout after {} polls", POLL_ATTEMPTS)
                    }
                    _ => error!("I2C communications error: {:?}", err),
                }
                err
            })
    }

    fn trigger_one_shot(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_command(Register::Control.command(), Some(registers::one_shot_control()))?;
        Ok(())
    }

    /// 按固定节奏轮询控制寄存器，直到 ADC 有效位置位
    fn wait_for_valid(&mut self) -> Result<(), Error<I2C::Error>> {
        for _ in 0..POLL_ATTEMPTS {
            let status = self.read_register(Register::Control)?;
            self.delay.delay_ms(POLL_INTERVAL_MS);
            if status & CTL_ADC_VALID != 0 {
                return Ok(());
            }
        }
        Err(Error::ConversionTimeout)
    }

    /// 依次读取四个数据寄存器，任一失败则丢弃已读数据
    ///
    /// 首次失败即返回，不再发送剩余寄存器的读命令。
    fn read_data(&mut self) -> Result<Channels, Error<I2C::Error>> {
        let data0_low = self.read_register(Register::Data0Low)?;
        let data0_high = self.read_register(Register::Data0High)?;
        let data1_low = self.read_register(Register::Data1Low)?;
        let data1_high = self.read_register(Register::Data1High)?;
        Ok(Channels::from_bytes(data0_low, data0_high, data1_low, data1_high))
    }

    /// 发送命令字节，可选附带一个数据字节，作为一次总线写事务
    fn write_command(&mut self, command: u8, value: Option<u8>) -> Result<(), I2C::Error> {
        match value {
            Some(value) => self.i2c.write(self.address, &[command, value]),
            None => self.i2c.write(self.address, &[command]),
        }
    }

    /// 设置寄存器指针后读回一个字节
    fn read_register(&mut self, register: Register) -> Result<u8, I2C::Error> {
        self.write_command(register.command(), None)?;
        let mut buf = [0u8; 1];
        self.i2c.read(self.address, &mut buf)?;
        Ok(buf[0])
    }
}
