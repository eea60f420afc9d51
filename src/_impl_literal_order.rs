use super::*;
use crate::formula::Formula;

impl LiteralOrder {
    /// Create a new `LiteralOrder` with the given named literals, in the
    /// given order.
    ///
    /// *Panics:* `literals` must contain unique names, and there can be at
    /// most `u16::MAX - 1` of them.
    pub fn new(literals: &[&str]) -> LiteralOrder {
        if literals.len() >= usize::from(u16::MAX - 1) {
            panic!(
                "Too many literals. There can be at most {} literals.",
                u16::MAX - 1
            )
        }
        let mut literal_names: Vec<String> = Vec::with_capacity(literals.len());
        let mut literal_index_mapping: HashMap<String, u16> = HashMap::new();
        for name in literals {
            if literal_index_mapping.contains_key(*name) {
                panic!("Duplicate literal name '{}'.", name);
            }
            literal_index_mapping.insert(name.to_string(), literal_names.len() as u16);
            literal_names.push(name.to_string());
        }
        LiteralOrder {
            literal_names,
            literal_index_mapping,
        }
    }

    /// Create a `LiteralOrder` holding the literals of the given formula in
    /// first-occurrence order, left to right. This is the order the original
    /// input yields and the one the decision-tree pipeline expects.
    pub fn from_formula(formula: &Formula) -> LiteralOrder {
        let names = formula.literals();
        let name_refs: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
        LiteralOrder::new(&name_refs)
    }

    /// Return the number of literals in this order.
    pub fn num_literals(&self) -> u16 {
        self.literal_names.len() as u16
    }

    /// Create a `BddVariable` based on a literal name. If the name does not
    /// appear in this order, return `None`.
    pub fn var_by_name(&self, name: &str) -> Option<BddVariable> {
        self.literal_index_mapping.get(name).cloned().map(BddVariable)
    }

    /// Obtain the name of a specific `BddVariable`.
    ///
    /// *Panics:* `var` must be a valid literal position in this order.
    pub fn name_of(&self, var: BddVariable) -> &str {
        &self.literal_names[var.to_index()]
    }

    /// The literal names in order.
    pub fn names(&self) -> &[String] {
        &self.literal_names
    }

    /// Exhaustively iterate over all `2^n` assignments of the literals in
    /// this order. See [`AssignmentIterator`] for the bit ordering.
    pub fn assignments(&self) -> AssignmentIterator<'_> {
        AssignmentIterator::new(self)
    }
}
