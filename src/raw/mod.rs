mod node;

pub(crate) use node::{Link, Node, Tree};
