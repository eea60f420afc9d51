use super::*;
use std::fmt::{Display, Error, Formatter};

impl Display for BddVariable {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        f.write_fmt(format_args!("{}", self.0))
    }
}

impl BddVariable {
    /// Cast this variable to a standard usize index into the literal order.
    pub fn to_index(self) -> usize {
        self.0 as usize
    }

    /// Create a variable from a position in the literal order.
    pub fn from_index(index: usize) -> BddVariable {
        BddVariable(index as u16)
    }
}
