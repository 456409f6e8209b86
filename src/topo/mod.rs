//! 拓扑构建
//!
//! 递归树生成器和基于 JSON 描述的拓扑构建。

pub mod spec;
pub mod tree;

pub use spec::{LinkSpec, SpecError, TopologySpec};
pub use tree::{
    Expansion, MAX_GENERATED_NODES, TreeOpts, TreeParams, TreeTopology, build_tree, expand_tree,
    generate,
};
