//! 拓扑构建错误

use super::id::NodeId;

pub type Result<T> = std::result::Result<T, TopoError>;

/// 所有错误都是本地、同步、不可重试的校验失败。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopoError {
    #[error("duplicate node name: {0}")]
    DuplicateName(String),

    #[error("invalid node name: {0:?}")]
    InvalidName(String),

    #[error("node {0:?} does not belong to this topology")]
    UnknownNode(NodeId),

    #[error("self link on node {0:?}")]
    SelfLink(NodeId),

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("no node named {0}")]
    NotFound(String),
}

impl TopoError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        TopoError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
