//! 通用工具函数

use uuid::Uuid;

/// 生成新的 UUID v7（时间有序）
pub fn new_id() -> Uuid {
    Uuid::now_v7()
}

/// 判断字符串是否为空白
///
/// 去掉首尾 U+0000..=U+0020 的字符后为空即为空白；NBSP 等 Unicode 空格不算空白
pub fn is_blank(value: &str) -> bool {
    value.trim_matches(|c: char| c <= ' ').is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("u-1"));
        assert!(!is_blank("  u-1  "));
    }

    #[test]
    fn test_is_blank_control_and_unicode_spaces() {
        assert!(is_blank("\u{1}\u{1f}"));
        assert!(is_blank("\0 \u{7}"));
        assert!(!is_blank("\u{a0}\u{3000}"));
        assert!(!is_blank("\u{2003}"));
    }

    #[test]
    fn test_new_id_is_time_ordered() {
        let first = new_id();
        let second = new_id();
        assert_ne!(first, second);
        assert_eq!(first.get_version_num(), 7);
    }
}
