//! Sensor channels and ingestion-side validation
//!
//! Raw data reaches the core in two textual forms: serial lines from the
//! sensor board (`"<index>: <value>"`) and the CPU temperature report of the
//! periodic tick (`"temp=48.3'C"`). Both are parsed into a typed
//! [`SensorReading`] before they may touch a sample buffer.

use core::str::FromStr;

use thiserror_no_std::Error;

/// Number of sensors attached to the serial board
pub const SERIAL_SENSOR_COUNT: usize = 5;

/// Total number of telemetry channels (serial sensors plus the CPU)
pub const CHANNEL_COUNT: usize = SERIAL_SENSOR_COUNT + 1;

/// Separator between sensor index and value on a serial line
const SERIAL_FIELD_SEPARATOR: &str = ": ";

/// Prefix of the CPU temperature report
const CPU_REPORT_PREFIX: &str = "temp=";

/// Unit suffix of the CPU temperature report
const CPU_REPORT_SUFFIX: &str = "'C";

/// Errors raised while validating incoming sensor data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SensorError {
    /// The line does not have the `"<index>: <value>"` shape
    #[error("Malformed serial line (expected \"<index>: <value>\")")]
    MalformedLine,

    /// A field could not be parsed as a number
    #[error("Invalid number in field: {field}")]
    InvalidNumber {
        /// Which field failed to parse
        field: &'static str,
    },

    /// The sensor index does not map to a serial channel
    #[error("Unknown sensor index: {index} (max: {max})")]
    UnknownIndex {
        /// The index that was received
        index: usize,
        /// Highest valid index
        max: usize,
    },

    /// The value parsed but is NaN or infinite
    #[error("Non-finite sensor value")]
    NonFiniteValue,

    /// The CPU report does not look like `temp=<value>'C`
    #[error("Malformed CPU temperature report")]
    MalformedCpuReport,
}

/// Telemetry channels in graph order
///
/// The discriminant doubles as the series index, which selects the
/// `color<N>` style class of a rendered series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Channel {
    /// SoC temperature, sampled by the periodic tick
    Cpu,
    /// Outdoor temperature
    Outside,
    /// Top layer of the hot-water storage tank
    StorageTop,
    /// Middle layer of the storage tank
    StorageMid,
    /// Bottom layer of the storage tank
    StorageBot,
    /// Flow temperature towards the heating circuit
    ToHeatingCircle,
}

impl Channel {
    /// All channels in series order
    pub const ALL: [Channel; CHANNEL_COUNT] = [
        Self::Cpu,
        Self::Outside,
        Self::StorageTop,
        Self::StorageMid,
        Self::StorageBot,
        Self::ToHeatingCircle,
    ];

    /// Serial channels in board index order
    pub const SERIAL: [Channel; SERIAL_SENSOR_COUNT] = [
        Self::Outside,
        Self::StorageTop,
        Self::StorageMid,
        Self::StorageBot,
        Self::ToHeatingCircle,
    ];

    /// Position of this channel in [`Channel::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Map a serial board index to its channel
    pub const fn from_serial_index(index: usize) -> Option<Self> {
        if index < SERIAL_SENSOR_COUNT {
            Some(Self::SERIAL[index])
        } else {
            None
        }
    }

    /// Serial board index, or `None` for the CPU channel
    pub const fn serial_index(self) -> Option<usize> {
        match self {
            Self::Cpu => None,
            other => Some(other as usize - 1),
        }
    }

    /// Template variable key holding the latest value of this channel
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cpu => "cpu_temp",
            Self::Outside => "temp_outside",
            Self::StorageTop => "temp_storage_top",
            Self::StorageMid => "temp_storage_mid",
            Self::StorageBot => "temp_storage_bot",
            Self::ToHeatingCircle => "temp_to_heating_circle",
        }
    }

    /// Short human readable name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Outside => "Outside",
            Self::StorageTop => "Storage top",
            Self::StorageMid => "Storage mid",
            Self::StorageBot => "Storage bottom",
            Self::ToHeatingCircle => "Heating flow",
        }
    }
}

/// A validated sample for one channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    /// Channel the value belongs to
    pub channel: Channel,
    /// Temperature in °C, always finite
    pub value: f32,
}

impl SensorReading {
    /// Create a reading, rejecting NaN and infinities
    pub fn new(channel: Channel, value: f32) -> Result<Self, SensorError> {
        if !value.is_finite() {
            return Err(SensorError::NonFiniteValue);
        }
        Ok(Self { channel, value })
    }

    /// Parse one line from the sensor board, e.g. `"2: 55"`
    pub fn parse_serial_line(line: &str) -> Result<Self, SensorError> {
        let mut fields = line.trim().split(SERIAL_FIELD_SEPARATOR);
        let (Some(index), Some(value), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(SensorError::MalformedLine);
        };

        let index: usize = index
            .trim()
            .parse()
            .map_err(|_| SensorError::InvalidNumber { field: "index" })?;
        let channel = Channel::from_serial_index(index).ok_or(SensorError::UnknownIndex {
            index,
            max: SERIAL_SENSOR_COUNT - 1,
        })?;

        Self::new(channel, parse_value(value)?)
    }

    /// Parse the CPU temperature report, e.g. `"temp=48.3'C\n"`
    pub fn parse_cpu_report(report: &str) -> Result<Self, SensorError> {
        let value = report
            .trim()
            .strip_prefix(CPU_REPORT_PREFIX)
            .and_then(|rest| rest.strip_suffix(CPU_REPORT_SUFFIX))
            .ok_or(SensorError::MalformedCpuReport)?;

        Self::new(Channel::Cpu, parse_value(value)?)
    }
}

impl FromStr for SensorReading {
    type Err = SensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_serial_line(s)
    }
}

fn parse_value(field: &str) -> Result<f32, SensorError> {
    field
        .trim()
        .parse()
        .map_err(|_| SensorError::InvalidNumber { field: "value" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_index_mapping() {
        assert_eq!(Channel::from_serial_index(0), Some(Channel::Outside));
        assert_eq!(Channel::from_serial_index(4), Some(Channel::ToHeatingCircle));
        assert_eq!(Channel::from_serial_index(5), None);

        for channel in Channel::SERIAL {
            let index = channel.serial_index().unwrap();
            assert_eq!(Channel::from_serial_index(index), Some(channel));
        }
        assert_eq!(Channel::Cpu.serial_index(), None);
    }

    #[test]
    fn test_channel_order_matches_index() {
        for (i, channel) in Channel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
    }

    #[test]
    fn test_parse_serial_line() {
        let reading = SensorReading::parse_serial_line("2: 55\r\n").unwrap();
        assert_eq!(reading.channel, Channel::StorageMid);
        assert_eq!(reading.value, 55.0);

        let reading: SensorReading = "0: -3.5".parse().unwrap();
        assert_eq!(reading.channel, Channel::Outside);
        assert_eq!(reading.value, -3.5);
    }

    #[test]
    fn test_parse_serial_line_rejects_bad_input() {
        assert_eq!(
            SensorReading::parse_serial_line("55"),
            Err(SensorError::MalformedLine)
        );
        assert_eq!(
            SensorReading::parse_serial_line("1: 2: 3"),
            Err(SensorError::MalformedLine)
        );
        assert_eq!(
            SensorReading::parse_serial_line("x: 20"),
            Err(SensorError::InvalidNumber { field: "index" })
        );
        assert_eq!(
            SensorReading::parse_serial_line("1: warm"),
            Err(SensorError::InvalidNumber { field: "value" })
        );
        assert_eq!(
            SensorReading::parse_serial_line("5: 20"),
            Err(SensorError::UnknownIndex { index: 5, max: 4 })
        );
        assert_eq!(
            SensorReading::parse_serial_line("1: NaN"),
            Err(SensorError::NonFiniteValue)
        );
    }

    #[test]
    fn test_parse_cpu_report() {
        let reading = SensorReading::parse_cpu_report("temp=48.3'C\n").unwrap();
        assert_eq!(reading.channel, Channel::Cpu);
        assert!((reading.value - 48.3).abs() < 1e-4);

        assert_eq!(
            SensorReading::parse_cpu_report("48.3"),
            Err(SensorError::MalformedCpuReport)
        );
    }
}
