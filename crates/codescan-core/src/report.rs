//! 结果报告（可观测输出行）
use anyhow::Result;
use std::io::Write;

use crate::findings::Match;

/// 将报告行写入输出汇
/// - 空序列：仅输出一行“无命中”提示
/// - 非空：先输出状态行，再按命中顺序逐行输出匹配原文
pub(crate) fn write_report(out: &mut dyn Write, matches: &[Match]) -> Result<()> {
    if matches.is_empty() {
        writeln!(out, "No match found.")?;
        return Ok(());
    }

    writeln!(out, "Results status: present.")?;
    for m in matches {
        writeln!(out, "{}", m.value)?;
    }
    Ok(())
}
