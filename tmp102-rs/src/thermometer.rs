use crate::{PollError, PollResult, Thermometer, Tmp102Bus, Tmp102Error};
use embedded_hal::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

impl<I: I2c<SevenBitAddress>, D: DelayNs> Thermometer for Tmp102Bus<I, D> {
    type BusError = Tmp102Error<I::Error>;

    fn is_present(&mut self, address: u8) -> bool {
        self.probe(address)
    }

    fn configure(&mut self, address: u8) -> PollResult<(), Self::BusError> {
        match self.configure_mode(address) {
            Ok(_) => Ok(()),
            Err(Tmp102Error::NotLatched(_)) => Err(PollError::Unverified),
            Err(e) => Err(e.into()),
        }
    }

    fn read_temperature(&mut self, address: u8) -> PollResult<f32, Self::BusError> {
        Ok(self.temperature(address)?.to_num())
    }
}
