use crate::{
    Acquisition, DeviceState, Publish, Reading, ReadingSet, StartupReport, ThermometerAsync,
    acquisition::startup_state,
};

impl<const N: usize> Acquisition<'_, N> {
    /// Configure every candidate that is present, asynchronously.
    ///
    /// See [`Acquisition::startup`].
    pub async fn startup_async<T: ThermometerAsync>(&self, bus: &mut T) -> StartupReport<N> {
        let mut report = StartupReport::new();
        for &address in self.candidates() {
            let state = if bus.is_present(address).await {
                startup_state(address, bus.configure(address).await)
            } else {
                log::debug!("0x{address:02x}: not present at startup");
                DeviceState::Absent
            };
            report.record(address, state);
        }
        report
    }

    /// Run one tick asynchronously.
    ///
    /// See [`Acquisition::tick`].
    pub async fn tick_async<T: ThermometerAsync>(&self, bus: &mut T) -> ReadingSet<N> {
        let mut readings = ReadingSet::new();
        for &address in self.candidates() {
            if !bus.is_present(address).await {
                log::trace!("0x{address:02x}: absent");
                continue;
            }
            match bus.read_temperature(address).await {
                Ok(celsius) => {
                    readings.push(Reading::new(address, celsius));
                }
                Err(_) => log::trace!("0x{address:02x}: read failed, skipped"),
            }
        }
        readings
    }

    /// Run one tick asynchronously and hand the readings to `sink`.
    ///
    /// See [`Acquisition::poll`].
    pub async fn poll_async<T: ThermometerAsync, P: Publish>(
        &self,
        bus: &mut T,
        sink: &mut P,
    ) -> Result<ReadingSet<N>, P::Error> {
        let readings = self.tick_async(bus).await;
        if !readings.is_empty() {
            sink.publish(readings.as_slice())?;
        }
        Ok(readings)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use crate::{
        Acquisition, DeviceState, PollResult, Reading, Thermometer, ThermometerAsync,
        acquisition::tests::{CANDIDATES, FakeBus, Recorder, sensor},
    };
    use embassy_futures::block_on;
    use std::{string::String, vec};

    struct AsyncBus(FakeBus);

    impl ThermometerAsync for AsyncBus {
        type BusError = &'static str;

        async fn is_present(&mut self, address: u8) -> bool {
            self.0.is_present(address)
        }

        async fn configure(&mut self, address: u8) -> PollResult<(), Self::BusError> {
            self.0.configure(address)
        }

        async fn read_temperature(&mut self, address: u8) -> PollResult<f32, Self::BusError> {
            self.0.read_temperature(address)
        }
    }

    #[test]
    fn async_cycle_matches_blocking_cycle() {
        let acq = Acquisition::<3>::new(&CANDIDATES).unwrap();
        let mut bus = AsyncBus(FakeBus::with(&[sensor(0x48, 25.0)]));
        let mut sink = Recorder::default();
        let report = block_on(acq.startup_async(&mut bus));
        assert_eq!(report.state(0x48), Some(DeviceState::Verified));
        assert_eq!(report.state(0x4d), Some(DeviceState::Absent));
        let set = block_on(acq.poll_async(&mut bus, &mut sink)).unwrap();
        assert_eq!(set.as_slice(), &[Reading::new(0x48, 25.0)]);
        assert_eq!(sink.payloads, vec![String::from("Addr 0x48: 25.00 C  |  ")]);
    }

    #[test]
    fn async_empty_tick_is_not_published() {
        let acq = Acquisition::<3>::new(&CANDIDATES).unwrap();
        let mut bus = AsyncBus(FakeBus::default());
        let mut sink = Recorder::default();
        let set = block_on(acq.poll_async(&mut bus, &mut sink)).unwrap();
        assert!(set.is_empty());
        assert!(sink.payloads.is_empty());
    }
}
