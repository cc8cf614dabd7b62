//! 扫描主流程
use anyhow::Result;
use std::io::Write;

use crate::report::write_report;
use crate::scanner::TextScanner;

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ScanStats {
    pub matches_found: usize,
}

/// 对输入文本执行一次扫描并写出报告
/// 顺序保证：提取完整结束后才产生任何输出；报告行与命中顺序一致
pub fn scan_and_report(text: &str, out: &mut dyn Write) -> Result<ScanStats> {
    let scanner = TextScanner::new()?;
    let matches = scanner.extract(text);
    let stats = ScanStats {
        matches_found: matches.len(),
    };
    write_report(out, &matches)?;
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_reports_no_match_for_plain_text() {
        let mut out: Vec<u8> = Vec::new();
        let stats = scan_and_report("no codes here", &mut out).unwrap();
        assert_eq!(stats.matches_found, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "No match found.\n");
    }

    #[test]
    fn scan_reports_each_match_on_its_own_line() {
        let mut out: Vec<u8> = Vec::new();
        let stats = scan_and_report("Ref 12-345-67-89 and 00-000-00-00.", &mut out).unwrap();
        assert_eq!(stats.matches_found, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Results status: present.\n12-345-67-89\n00-000-00-00\n"
        );
    }

    #[test]
    fn scan_of_empty_text_still_reports() {
        let mut out: Vec<u8> = Vec::new();
        let stats = scan_and_report("", &mut out).unwrap();
        assert_eq!(stats.matches_found, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "No match found.\n");
    }
}
