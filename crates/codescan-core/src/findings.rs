//! 命中项（对外暴露）

/// 单次命中：整体匹配的原文，以及在输入中的起始字节偏移。
/// 偏移仅用于核对结果顺序，不参与输出。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub value: String,
    pub start_offset: usize,
}
