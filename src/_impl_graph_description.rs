use crate::formula::Formula;
use crate::*;

/// Label of the low-branch edge of a BDD decision node.
const EDGE_FALSE: &str = "F";
/// Label of the high-branch edge of a BDD decision node.
const EDGE_TRUE: &str = "T";
/// Label used when both branches of a decision node target the same child.
const EDGE_MERGED: &str = "F/T";

/// Display color of the `false` terminal node.
const COLOR_FALSE_TERMINAL: &str = "salmon";
/// Display color of the `true` terminal node.
const COLOR_TRUE_TERMINAL: &str = "palegreen";

impl GraphDescription {
    /// Create a new empty graph description.
    pub fn new() -> GraphDescription {
        GraphDescription {
            ids: BTreeMap::new(),
            edges: BTreeMap::new(),
            colors: BTreeMap::new(),
        }
    }

    /// Describe a formula tree for the external renderer.
    ///
    /// Ids are assigned in post-order: each child receives its id before its
    /// parent, so a parent's edge list simply targets the ids its children's
    /// roots received. Leaves are labeled by their literal name, internal
    /// nodes by their operator keyword. Formula graphs carry no edge labels
    /// and no colors.
    pub fn from_formula(formula: &Formula) -> GraphDescription {
        let mut graph = GraphDescription::new();
        add_formula_node(formula, &mut graph);
        graph
    }

    /// Describe a (naive or reduced) `Bdd` for the external renderer.
    ///
    /// Ids are the arena indices, which already follow a deterministic
    /// children-before-parents order. Terminals are labeled `false`/`true`
    /// and are the only colored nodes. Every decision node contributes an
    /// `F`-labeled edge to its low child and a `T`-labeled edge to its high
    /// child, or a single `F/T`-labeled edge when both links coincide.
    pub fn from_bdd(bdd: &Bdd, order: &LiteralOrder) -> GraphDescription {
        let mut graph = GraphDescription::new();
        for pointer in bdd.pointers() {
            let id = pointer.to_index() as u32;
            if pointer.is_terminal() {
                graph.ids.insert(id, format!("{}", pointer.is_one()));
                let color = if pointer.is_one() {
                    COLOR_TRUE_TERMINAL
                } else {
                    COLOR_FALSE_TERMINAL
                };
                graph.colors.insert(id, color.to_string());
                continue;
            }
            let name = order.name_of(bdd.var_of(pointer));
            graph.ids.insert(id, name.to_string());
            let low_link = bdd.low_link_of(pointer);
            let high_link = bdd.high_link_of(pointer);
            let edges = if low_link == high_link {
                vec![GraphEdge {
                    target: low_link.to_index() as u32,
                    label: Some(EDGE_MERGED),
                }]
            } else {
                vec![
                    GraphEdge {
                        target: low_link.to_index() as u32,
                        label: Some(EDGE_FALSE),
                    },
                    GraphEdge {
                        target: high_link.to_index() as u32,
                        label: Some(EDGE_TRUE),
                    },
                ]
            };
            graph.edges.insert(id, edges);
        }
        graph
    }
}

impl Default for GraphDescription {
    fn default() -> Self {
        GraphDescription::new()
    }
}

/// **(internal)** Add one formula node (children first) and return its id.
fn add_formula_node(formula: &Formula, graph: &mut GraphDescription) -> u32 {
    match formula {
        Formula::Literal(name) => {
            let id = graph.ids.len() as u32;
            graph.ids.insert(id, name.clone());
            id
        }
        Formula::Operator(op, children) => {
            let child_edges: Vec<GraphEdge> = children
                .iter()
                .map(|child| GraphEdge {
                    target: add_formula_node(child, graph),
                    label: None,
                })
                .collect();
            let id = graph.ids.len() as u32;
            graph.ids.insert(id, op.keyword().to_string());
            graph.edges.insert(id, child_edges);
            id
        }
    }
}
