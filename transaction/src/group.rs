use ckb_txkit_error::Error;

/// Witness indices covered by one signing operation.
///
/// The first index is the primary slot, it receives the signed `WitnessArgs`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WitnessGroup(Vec<usize>);

impl WitnessGroup {
    /// Creates a group from indices in construction order.
    pub fn new(indices: Vec<usize>) -> Result<Self, Error> {
        if indices.is_empty() {
            return Err(Error::InvalidWitnessGroup(
                "witness group is empty".to_owned(),
            ));
        }
        Ok(WitnessGroup(indices))
    }

    pub fn primary(&self) -> usize {
        self.0[0]
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Ensures every index addresses an existing witness.
    pub(crate) fn check_bounds(&self, witnesses_len: usize) -> Result<(), Error> {
        match self.0.iter().find(|index| **index >= witnesses_len) {
            Some(index) => Err(Error::InvalidWitnessGroup(format!(
                "witness index {index} out of bound, witnesses len: {witnesses_len}"
            ))),
            None => Ok(()),
        }
    }
}
