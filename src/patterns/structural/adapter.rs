//! Adapter: a European socket made to look like a US one.

use crate::domain::model::{Pattern, Trace};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

pub trait EuropeanSocketInterface {
    fn voltage(&self) -> i32;
    fn live(&self) -> i32;
    fn neutral(&self) -> i32;
    fn earth(&self) -> i32;
}

pub trait UsaSocketInterface {
    fn voltage(&self) -> i32;
    fn live(&self) -> i32;
    fn neutral(&self) -> i32;
}

/// The adaptee.
pub struct Socket;

impl EuropeanSocketInterface for Socket {
    fn voltage(&self) -> i32 {
        230
    }

    fn live(&self) -> i32 {
        1
    }

    fn neutral(&self) -> i32 {
        -1
    }

    fn earth(&self) -> i32 {
        0
    }
}

pub const USA_VOLTAGE: i32 = 110;

/// Reports US voltage and passes live/neutral through. Earth is not part of
/// the US interface.
pub struct Adapter<S: EuropeanSocketInterface> {
    socket: S,
}

impl<S: EuropeanSocketInterface> Adapter<S> {
    pub fn new(socket: S) -> Self {
        Self { socket }
    }

    pub fn into_inner(self) -> S {
        self.socket
    }
}

impl<S: EuropeanSocketInterface> UsaSocketInterface for Adapter<S> {
    fn voltage(&self) -> i32 {
        USA_VOLTAGE
    }

    fn live(&self) -> i32 {
        self.socket.live()
    }

    fn neutral(&self) -> i32 {
        self.socket.neutral()
    }
}

/// The client; only speaks the US interface.
pub struct ElectricKettle<P: UsaSocketInterface> {
    power: P,
}

impl<P: UsaSocketInterface> ElectricKettle<P> {
    pub fn new(power: P) -> Self {
        Self { power }
    }

    pub fn boil(&self) -> &'static str {
        if self.power.voltage() > USA_VOLTAGE {
            "Kettle on fire!"
        } else if self.power.live() == 1 && self.power.neutral() == -1 {
            "Coffee time!"
        } else {
            "No power."
        }
    }
}

pub struct AdapterDemo;

impl Demo for AdapterDemo {
    fn pattern(&self) -> Pattern {
        Pattern::Adapter
    }

    fn run(&self, trace: &mut Trace) -> Result<()> {
        let kettle = ElectricKettle::new(Adapter::new(Socket));
        trace.line(kettle.boil());
        Ok(())
    }
}
