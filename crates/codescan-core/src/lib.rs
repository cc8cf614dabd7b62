//! 编码提取核心库
//!
//! 设计要点：
//! - 固定模式（2-3-2-2 位数字、连字符分隔），单遍 `captures_iter` 提取。
//! - 提取是对输入串的纯函数；报告只是围绕结果序列的薄展示层。
//! - 单线程同步执行：提取完整结束后才产生任何输出。

mod findings;
mod report;
mod scan;
mod scanner;

pub use findings::Match;
pub use scan::{scan_and_report, ScanStats};
pub use scanner::TextScanner;
