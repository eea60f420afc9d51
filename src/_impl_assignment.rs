use super::*;

impl Assignment {
    /// Create a new empty assignment.
    pub fn new() -> Assignment {
        Assignment(HashMap::new())
    }

    /// Set the value of a literal name in this assignment.
    pub fn set(&mut self, name: &str, value: bool) {
        self.0.insert(name.to_string(), value);
    }

    /// Get the value of a literal name, or `None` if it is not bound.
    pub fn value(&self, name: &str) -> Option<bool> {
        self.0.get(name).cloned()
    }

    /// The number of bound literal names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no literal name is bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> AssignmentIterator<'a> {
    /// Create a new iterator over all assignments of the given order.
    ///
    /// *Panics:* the order must have fewer than 64 literals (the builder
    /// ceiling rejects such formulas long before this becomes relevant).
    pub fn new(order: &'a LiteralOrder) -> AssignmentIterator<'a> {
        if order.num_literals() >= 64 {
            panic!(
                "Cannot enumerate the assignments of {} literals.",
                order.num_literals()
            );
        }
        AssignmentIterator {
            order,
            next_index: 0,
        }
    }
}

impl<'a> Iterator for AssignmentIterator<'a> {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        let n = u32::from(self.order.num_literals());
        if self.next_index >= (1u64 << n) {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;
        let mut assignment = Assignment::new();
        for k in 0..n {
            // The first literal of the order is the most significant bit.
            let bit = (index >> (n - 1 - k)) & 1;
            let name = self.order.name_of(BddVariable::from_index(k as usize));
            assignment.set(name, bit == 1);
        }
        Some(assignment)
    }
}
