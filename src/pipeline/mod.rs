// src/pipeline/mod.rs

//! End-to-end message transmission: encode, prepare, simulate, decode.

use crate::core::Error;
use crate::decoding;
use crate::encoding;
use crate::plan::PreparationPlan;
use crate::simulation::Backend;
use tracing::{debug, info, info_span};

/// Number of simulation runs per transmission.
pub const REPETITIONS: usize = 1;

/// Sends `message` through a preparation circuit on `backend` and returns
/// the text decoded from the measurements.
///
/// Non-printable characters do not survive the trip. Backend errors are
/// returned unchanged; nothing is retried.
pub fn transmit<B>(backend: &B, message: &str) -> Result<String, Error>
where
    B: Backend + ?Sized,
{
    let _span = info_span!("transmit", chars = message.chars().count()).entered();

    let bits = encoding::encode(message)?;
    debug!(bits = bits.len(), "encoded message");

    let plan = PreparationPlan::build(&bits);
    let result = backend.simulate(plan.circuit(), REPETITIONS)?;
    debug!(keys = result.len(), "collected measurements");

    let decoded = decoding::decode_message(&result, bits.len());
    info!(decoded_chars = decoded.chars().count(), "decoded message");
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::Simulator;

    #[test]
    fn test_transmit_hello_world() -> Result<(), Error> {
        assert_eq!(transmit(&Simulator::new(), "Hello World!")?, "Hello World!");
        Ok(())
    }

    #[test]
    fn test_transmit_through_trait_object() -> Result<(), Error> {
        let backend: Box<dyn Backend> = Box::new(Simulator::with_seed(1));
        assert_eq!(transmit(backend.as_ref(), "A")?, "A");
        Ok(())
    }

    #[test]
    fn test_transmit_rejects_wide_characters() {
        assert!(matches!(
            transmit(&Simulator::new(), "π"),
            Err(Error::UnencodableCharacter { character: 'π', position: 0 })
        ));
    }
}
