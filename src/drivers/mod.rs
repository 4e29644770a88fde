//! Output drivers: the indicator LED and the I²C character LCD.

pub mod indicator;
pub mod lcd1602;
