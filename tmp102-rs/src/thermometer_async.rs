use crate::{PollError, PollResult, ThermometerAsync, Tmp102BusAsync, Tmp102Error};
use embedded_hal_async::{
    delay::DelayNs,
    i2c::{I2c, SevenBitAddress},
};

impl<I: I2c<SevenBitAddress>, D: DelayNs> ThermometerAsync for Tmp102BusAsync<I, D> {
    type BusError = Tmp102Error<I::Error>;

    async fn is_present(&mut self, address: u8) -> bool {
        self.probe(address).await
    }

    async fn configure(&mut self, address: u8) -> PollResult<(), Self::BusError> {
        match self.configure_mode(address).await {
            Ok(_) => Ok(()),
            Err(Tmp102Error::NotLatched(_)) => Err(PollError::Unverified),
            Err(e) => Err(e.into()),
        }
    }

    async fn read_temperature(&mut self, address: u8) -> PollResult<f32, Self::BusError> {
        Ok(self.temperature(address).await?.to_num())
    }
}
