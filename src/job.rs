use std::fmt;

/// A finished command stream for exactly one label, starting with the mode
/// selection and ending with the print start byte. Produced by
/// [Encoder::finalize][crate::encoder::Encoder::finalize].
#[derive(Clone, PartialEq, Eq)]
pub struct PrintJob(Vec<u8>);

impl PrintJob {
    pub(crate) fn new(data: Vec<u8>) -> Self {
        PrintJob(data)
    }

    /// The bytes to send to the printer, unmodified.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for PrintJob {
    /// Space separated hex bytes, e.g. `1B 69 61 00 1B 40 0C`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (idx, byte) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}
