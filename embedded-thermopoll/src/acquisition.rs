use crate::{PollError, PollResult, Publish, Reading, ReadingSet, Thermometer};
use core::convert::Infallible;

/// Outcome of the startup configuration of one candidate address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    /// Nothing acknowledged the address during startup.
    Absent,
    /// The device was configured and the readback confirmed the mode.
    Verified,
    /// The device answered, but configuration failed or did not latch.
    /// It is still polled, without a guarantee on resolution.
    Unverified,
}

/// Per-candidate outcome of [`Acquisition::startup`], in candidate-list order.
#[derive(Debug, Clone)]
pub struct StartupReport<const N: usize> {
    entries: [(u8, DeviceState); N],
    len: usize,
}

impl<const N: usize> StartupReport<N> {
    pub(crate) fn new() -> Self {
        Self {
            entries: [(0, DeviceState::Absent); N],
            len: 0,
        }
    }

    pub(crate) fn record(&mut self, address: u8, state: DeviceState) {
        // Acquisition::new guarantees the candidate list fits.
        if self.len < N {
            self.entries[self.len] = (address, state);
            self.len += 1;
        }
    }

    /// The state of the device at `address`, if it is a candidate.
    pub fn state(&self, address: u8) -> Option<DeviceState> {
        self.iter().find(|(a, _)| *a == address).map(|(_, s)| *s)
    }

    /// Number of devices whose configuration was verified.
    pub fn verified(&self) -> usize {
        self.iter()
            .filter(|(_, s)| *s == DeviceState::Verified)
            .count()
    }

    /// Iterate over `(address, state)` pairs.
    pub fn iter(&self) -> core::slice::Iter<'_, (u8, DeviceState)> {
        self.entries[..self.len].iter()
    }
}

/// The acquisition cycle over a fixed, ordered list of candidate addresses.
///
/// `N` is the largest number of readings a single tick can hold, and therefore the
/// largest candidate list accepted.
///
/// The cycle keeps no sensor state between ticks: every tick re-probes every
/// candidate, so devices may come and go on the bus.
#[derive(Debug, Clone, Copy)]
pub struct Acquisition<'a, const N: usize> {
    candidates: &'a [u8],
}

impl<'a, const N: usize> Acquisition<'a, N> {
    /// Creates a new [`Acquisition`] over `candidates`.
    ///
    /// # Errors
    /// [`PollError::TooManyCandidates`] if `candidates` holds more than `N` addresses.
    pub fn new(candidates: &'a [u8]) -> PollResult<Self, Infallible> {
        if candidates.len() > N {
            return Err(PollError::TooManyCandidates);
        }
        Ok(Self { candidates })
    }

    /// The candidate addresses, in probing order.
    pub fn candidates(&self) -> &'a [u8] {
        self.candidates
    }

    /// Configure every candidate that is present.
    ///
    /// Runs once before the steady-state ticks. A device whose configuration cannot be
    /// verified is logged as a warning and stays in the polling set.
    pub fn startup<T: Thermometer>(&self, bus: &mut T) -> StartupReport<N> {
        let mut report = StartupReport::new();
        for &address in self.candidates {
            let state = if bus.is_present(address) {
                startup_state(address, bus.configure(address))
            } else {
                log::debug!("0x{address:02x}: not present at startup");
                DeviceState::Absent
            };
            report.record(address, state);
        }
        report
    }

    /// Run one tick: probe each candidate in order and read the ones that are present.
    ///
    /// Absent devices and failed reads are skipped without being retried.
    pub fn tick<T: Thermometer>(&self, bus: &mut T) -> ReadingSet<N> {
        let mut readings = ReadingSet::new();
        for &address in self.candidates {
            if !bus.is_present(address) {
                log::trace!("0x{address:02x}: absent");
                continue;
            }
            match bus.read_temperature(address) {
                Ok(celsius) => {
                    readings.push(Reading::new(address, celsius));
                }
                Err(_) => log::trace!("0x{address:02x}: read failed, skipped"),
            }
        }
        readings
    }

    /// Run one tick and hand the readings to `sink`.
    ///
    /// The sink is not called when no device produced a reading.
    pub fn poll<T: Thermometer, P: Publish>(
        &self,
        bus: &mut T,
        sink: &mut P,
    ) -> Result<ReadingSet<N>, P::Error> {
        let readings = self.tick(bus);
        if !readings.is_empty() {
            sink.publish(readings.as_slice())?;
        }
        Ok(readings)
    }
}

pub(crate) fn startup_state<E>(address: u8, result: PollResult<(), E>) -> DeviceState {
    match result {
        Ok(()) => {
            log::debug!("0x{address:02x}: configured");
            DeviceState::Verified
        }
        Err(PollError::Unverified) => {
            log::warn!("0x{address:02x}: configuration did not latch, resolution not guaranteed");
            DeviceState::Unverified
        }
        Err(_) => {
            log::warn!("0x{address:02x}: configuration failed on the bus, resolution not guaranteed");
            DeviceState::Unverified
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    extern crate std;
    use super::*;
    use std::{format, string::String, vec, vec::Vec};

    #[derive(Debug, Clone, Copy, PartialEq)]
    pub(crate) enum Call {
        Probe(u8),
        Configure(u8),
        Read(u8),
    }

    #[derive(Debug, Clone, Copy)]
    pub(crate) struct FakeDevice {
        pub address: u8,
        pub celsius: Option<f32>,
        pub latches: bool,
    }

    /// A bus of fake devices that records every operation issued against it.
    #[derive(Default)]
    pub(crate) struct FakeBus {
        pub devices: Vec<FakeDevice>,
        pub calls: Vec<Call>,
    }

    impl FakeBus {
        pub fn with(devices: &[FakeDevice]) -> Self {
            Self {
                devices: devices.to_vec(),
                calls: Vec::new(),
            }
        }

        pub fn device(&self, address: u8) -> Option<&FakeDevice> {
            self.devices.iter().find(|d| d.address == address)
        }

        pub fn remove(&mut self, address: u8) {
            self.devices.retain(|d| d.address != address);
        }
    }

    impl Thermometer for FakeBus {
        type BusError = &'static str;

        fn is_present(&mut self, address: u8) -> bool {
            self.calls.push(Call::Probe(address));
            self.device(address).is_some()
        }

        fn configure(&mut self, address: u8) -> PollResult<(), Self::BusError> {
            self.calls.push(Call::Configure(address));
            match self.device(address) {
                Some(d) if d.latches => Ok(()),
                Some(_) => Err(PollError::Unverified),
                None => Err(PollError::Other("nack")),
            }
        }

        fn read_temperature(&mut self, address: u8) -> PollResult<f32, Self::BusError> {
            self.calls.push(Call::Read(address));
            self.device(address)
                .and_then(|d| d.celsius)
                .ok_or(PollError::Other("nack"))
        }
    }

    /// Records every published payload.
    #[derive(Default)]
    pub(crate) struct Recorder {
        pub payloads: Vec<String>,
    }

    impl Publish for Recorder {
        type Error = Infallible;

        fn publish(&mut self, readings: &[Reading]) -> Result<(), Self::Error> {
            let mut out = String::new();
            crate::write_payload(&mut out, readings).unwrap();
            self.payloads.push(out);
            Ok(())
        }
    }

    pub(crate) const CANDIDATES: [u8; 3] = [0x4d, 0x48, 0x4f];

    pub(crate) fn sensor(address: u8, celsius: f32) -> FakeDevice {
        FakeDevice {
            address,
            celsius: Some(celsius),
            latches: true,
        }
    }

    #[test]
    fn only_present_device_is_published() {
        let acq = Acquisition::<3>::new(&CANDIDATES).unwrap();
        let mut bus = FakeBus::with(&[sensor(0x48, 25.0)]);
        let mut sink = Recorder::default();
        let set = acq.poll(&mut bus, &mut sink).unwrap();
        assert_eq!(set.as_slice(), &[Reading::new(0x48, 25.0)]);
        assert_eq!(sink.payloads, vec![String::from("Addr 0x48: 25.00 C  |  ")]);
        // absent devices are probed, never read
        assert_eq!(
            bus.calls,
            vec![
                Call::Probe(0x4d),
                Call::Probe(0x48),
                Call::Read(0x48),
                Call::Probe(0x4f)
            ]
        );
    }

    #[test]
    fn no_publication_when_nothing_present() {
        let acq = Acquisition::<3>::new(&CANDIDATES).unwrap();
        let mut bus = FakeBus::default();
        let mut sink = Recorder::default();
        for _ in 0..3 {
            let set = acq.poll(&mut bus, &mut sink).unwrap();
            assert!(set.is_empty());
        }
        assert!(sink.payloads.is_empty());
    }

    #[test]
    fn absent_address_never_affects_others() {
        let acq = Acquisition::<3>::new(&CANDIDATES).unwrap();
        let mut bus = FakeBus::with(&[sensor(0x4d, 21.5), sensor(0x4f, -2.0)]);
        for _ in 0..5 {
            let set = acq.tick(&mut bus);
            assert_eq!(
                set.as_slice(),
                &[Reading::new(0x4d, 21.5), Reading::new(0x4f, -2.0)]
            );
            assert!(set.get(0x48).is_none());
        }
    }

    #[test]
    fn present_but_unreadable_is_skipped() {
        let acq = Acquisition::<3>::new(&CANDIDATES).unwrap();
        let mut broken = sensor(0x4d, 0.0);
        broken.celsius = None;
        let mut bus = FakeBus::with(&[broken, sensor(0x4f, 30.0)]);
        let set = acq.tick(&mut bus);
        assert_eq!(set.as_slice(), &[Reading::new(0x4f, 30.0)]);
        // one read attempt per tick, no retry
        let reads = bus
            .calls
            .iter()
            .filter(|c| **c == Call::Read(0x4d))
            .count();
        assert_eq!(reads, 1);
    }

    #[test]
    fn devices_are_reprobed_every_tick() {
        let acq = Acquisition::<3>::new(&CANDIDATES).unwrap();
        let mut bus = FakeBus::with(&[sensor(0x48, 25.0), sensor(0x4f, 20.0)]);
        assert_eq!(acq.tick(&mut bus).len(), 2);
        bus.remove(0x48);
        let set = acq.tick(&mut bus);
        assert_eq!(set.as_slice(), &[Reading::new(0x4f, 20.0)]);
        bus.devices.push(sensor(0x48, 26.0));
        let set = acq.tick(&mut bus);
        assert_eq!(
            set.as_slice(),
            &[Reading::new(0x48, 26.0), Reading::new(0x4f, 20.0)]
        );
    }

    #[test]
    fn startup_warns_and_keeps_unverified_devices() {
        let acq = Acquisition::<3>::new(&CANDIDATES).unwrap();
        let mut stubborn = sensor(0x4f, 19.0);
        stubborn.latches = false;
        let mut bus = FakeBus::with(&[sensor(0x48, 25.0), stubborn]);
        let report = acq.startup(&mut bus);
        assert_eq!(report.state(0x4d), Some(DeviceState::Absent));
        assert_eq!(report.state(0x48), Some(DeviceState::Verified));
        assert_eq!(report.state(0x4f), Some(DeviceState::Unverified));
        assert_eq!(report.state(0x10), None);
        assert_eq!(report.verified(), 1);
        assert!(!bus.calls.contains(&Call::Configure(0x4d)));

        let mut sink = Recorder::default();
        acq.poll(&mut bus, &mut sink).unwrap();
        assert_eq!(
            sink.payloads,
            vec![format!("Addr 0x48: 25.00 C  |  Addr 0x4F: 19.00 C  |  ")]
        );
    }

    #[test]
    fn candidate_list_must_fit() {
        assert_eq!(
            Acquisition::<2>::new(&CANDIDATES).unwrap_err(),
            PollError::TooManyCandidates
        );
        let acq = Acquisition::<2>::new(&CANDIDATES[..2]).unwrap();
        assert_eq!(acq.candidates(), &[0x4d, 0x48]);
    }

    #[test]
    fn random_presence_matches_readings() {
        use rand::Rng;
        let mut rng = rand::rng();
        let acq = Acquisition::<3>::new(&CANDIDATES).unwrap();
        for _ in 0..64 {
            let mut bus = FakeBus::default();
            let mut expected = Vec::new();
            for &address in CANDIDATES.iter() {
                if rng.random_bool(0.5) {
                    let raw: i16 = rng.random_range(-2048..2048);
                    let celsius = raw as f32 * 0.0625;
                    bus.devices.push(sensor(address, celsius));
                    expected.push(Reading::new(address, celsius));
                }
            }
            assert_eq!(acq.tick(&mut bus).as_slice(), expected.as_slice());
        }
    }
}
