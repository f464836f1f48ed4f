//! GPIO pin abstractions
//!
//! Infallible digital input and output traits. Board glue wraps the chip
//! HAL's pin types; drivers only ever see these.

/// Logic level of a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level == Level::High
    }
}

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific level
    fn set_level(&mut self, level: Level) {
        match level {
            Level::High => self.set_high(),
            Level::Low => self.set_low(),
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }

    /// Current level of the pin
    fn level(&self) -> Level {
        Level::from(self.is_high())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    impl InputPin for MockPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_set_level() {
        let mut pin = MockPin { high: false };

        pin.set_level(Level::High);
        assert!(pin.is_set_high());
        assert_eq!(pin.level(), Level::High);

        pin.set_level(Level::Low);
        assert!(pin.is_set_low());
        assert!(pin.is_low());
    }

    #[test]
    fn test_level_bool_conversion() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert!(!bool::from(Level::Low));
    }
}
