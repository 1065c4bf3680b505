use embedded_hal::digital::{OutputPin, StatefulOutputPin};

// Holds the FPGA in reset/bootloader mode by keeping its select line low.
//
// Once engaged, the pin is owned by this type and there is no way to release
// it. The firmware parks the value in a `StaticCell` so it is never dropped
// (dropping an embassy `Output` returns the pad to its reset function).

pub struct BootloaderHold<P> {
    pin: P,
}

impl<P: OutputPin> BootloaderHold<P> {
    /// Drives `pin` low and takes ownership of it.
    pub fn engage(mut pin: P) -> Result<Self, P::Error> {
        pin.set_low()?;
        Ok(BootloaderHold { pin })
    }
}

impl<P: StatefulOutputPin> BootloaderHold<P> {
    /// Reports whether the output latch is still low.
    pub fn is_engaged(&mut self) -> Result<bool, P::Error> {
        self.pin.is_set_low()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    // Records every level written to it. `true` is high.

    struct FakePin {
        level: bool,
        writes: Vec<bool>,
    }

    impl FakePin {
        fn new(level: bool) -> Self {
            FakePin {
                level,
                writes: Vec::new(),
            }
        }
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl OutputPin for FakePin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.level = false;
            self.writes.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.level = true;
            self.writes.push(true);
            Ok(())
        }
    }

    impl StatefulOutputPin for FakePin {
        fn is_set_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.level)
        }

        fn is_set_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.level)
        }
    }

    #[test]
    fn engage_drives_low() {
        let mut hold = BootloaderHold::engage(FakePin::new(true)).unwrap();

        assert!(hold.is_engaged().unwrap());
        assert_eq!(hold.pin.writes, vec![false]);
    }

    #[test]
    fn engage_on_low_pin_stays_low() {
        let mut hold = BootloaderHold::engage(FakePin::new(false)).unwrap();

        assert!(hold.is_engaged().unwrap());
        assert!(hold.pin.writes.iter().all(|high| !high));
    }

    #[derive(Debug, PartialEq)]
    struct Broken;

    impl embedded_hal::digital::Error for Broken {
        fn kind(&self) -> embedded_hal::digital::ErrorKind {
            embedded_hal::digital::ErrorKind::Other
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = Broken;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            Err(Broken)
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            Err(Broken)
        }
    }

    #[test]
    fn engage_propagates_pin_error() {
        assert_eq!(BootloaderHold::engage(BrokenPin).err(), Some(Broken));
    }
}
