//! 文本扫描器（固定编码模式）
use anyhow::Result;

use crate::findings::Match;

/// 固定的编码模式：四段数字，宽度依次为 2-3-2-2，连字符分隔。
/// 捕获组与原始模式保持一致；提取时仅保留整体匹配（group 0）。
/// 显式使用 [0-9]：本 crate 的 `\d` 含全部 Unicode 数字，而编码只由 ASCII 数字构成。
const CODE_PATTERN: &str = r"([0-9]{2})-([0-9]{3})-([0-9]{2})-([0-9]{2})";

/// 文本扫描器：持有编译好的模式，对输入串做单遍提取。
pub struct TextScanner {
    pattern: regex::Regex,
}

impl TextScanner {
    /// 编译固定模式并构建扫描器
    pub fn new() -> Result<Self> {
        let pattern = regex::Regex::new(CODE_PATTERN)?;
        Ok(Self { pattern })
    }

    /// 提取输入文本中所有不重叠的编码命中（从左到右，保持文档顺序）
    /// - 纯函数：无副作用，同一输入重复调用结果一致
    /// - 空字符串返回空序列；匹配本身没有错误分支
    pub fn extract(&self, text: &str) -> Vec<Match> {
        let mut matches: Vec<Match> = Vec::new();
        for caps in self.pattern.captures_iter(text) {
            // 子捕获组（1..4）由模式计算但被丢弃，仅保留整体匹配
            let m = match caps.get(0) {
                Some(m) => m,
                None => continue,
            };
            matches.push(Match {
                value: text[m.start()..m.end()].to_string(),
                start_offset: m.start(),
            });
        }
        matches
    }
}
