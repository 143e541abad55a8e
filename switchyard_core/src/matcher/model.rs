use thiserror::Error;

use crate::api::SwitchSpec;
use crate::model::Arity;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CloseError {
    #[error("too few values provided for '{name}' (provided={provided}, expected={expected}).")]
    TooFewValues {
        name: String,
        provided: usize,
        expected: Arity,
    },
}

/// The argument run of a single matched switch.
///
/// Collects the value tokens that follow the switch token, up to what its `Arity` allows.
#[derive(Debug)]
pub(crate) struct ValueRun {
    name: String,
    switch: SwitchSpec,
    dropped: usize,
}

impl ValueRun {
    /// Open a run for `switch`, as it was named on the command line.
    pub(crate) fn open(name: impl Into<String>, switch: SwitchSpec) -> Self {
        Self {
            name: name.into(),
            switch,
            dropped: 0,
        }
    }

    /// Whether the run consumes value tokens at all.
    pub(crate) fn accepts_values(&self) -> bool {
        self.switch.has_arguments()
    }

    /// Capture a value token.
    /// Values beyond a fixed arity are consumed but dropped.
    pub(crate) fn push(&mut self, value: &str) {
        if !self.switch.add_value(value) {
            self.dropped += 1;
        }
    }

    pub(crate) fn close(self) -> Result<SwitchSpec, CloseError> {
        let ValueRun {
            name,
            switch,
            dropped,
        } = self;

        if switch.has_arguments() && !switch.has_enough_values() {
            return Err(CloseError::TooFewValues {
                name,
                provided: switch.values().len(),
                expected: switch.arity(),
            });
        }

        if dropped > 0 {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Dropped {dropped} excess value(s) for switch '{name}'.");
            }
        }

        Ok(switch)
    }
}
