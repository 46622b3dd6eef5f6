use crate::error::FormatError;
use chrono::{DateTime, Datelike, Timelike, Utc};

/// 最多支持的小数秒位数
const MAX_FRACTION_DIGITS: usize = 7;

/// 空模式使用的通用格式（与 `G` 相同）
const GENERAL_PATTERN: &str = "MM/dd/yyyy HH:mm:ss";

/// 将单字符标准格式说明符展开为等价的自定义模式（固定区域设置）。
///
/// # 参数
///
/// * `specifier` - 标准格式说明符。
///
/// # 返回值
///
/// 对应的自定义模式，未知说明符返回 `None`。
fn expand_standard(specifier: char) -> Option<&'static str> {
    let pattern = match specifier {
        'd' => "MM/dd/yyyy",
        'D' => "dddd, dd MMMM yyyy",
        'f' => "dddd, dd MMMM yyyy HH:mm",
        'F' | 'U' => "dddd, dd MMMM yyyy HH:mm:ss",
        'g' => "MM/dd/yyyy HH:mm",
        'G' => GENERAL_PATTERN,
        'm' | 'M' => "MMMM dd",
        'o' | 'O' => "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffffK",
        'r' | 'R' => "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'",
        's' => "yyyy'-'MM'-'dd'T'HH':'mm':'ss",
        't' => "HH:mm",
        'T' => "HH:mm:ss",
        'u' => "yyyy'-'MM'-'dd HH':'mm':'ss'Z'",
        'y' | 'Y' => "yyyy MMMM",
        _ => return None,
    };
    Some(pattern)
}

/// 使用自定义日期时间模式格式化一个 UTC 时间点。
///
/// 模式语法与常见的 `yyyy-MM-dd HH:mm:ss` 风格一致（固定区域设置输出）：
/// - `d`/`dd`/`ddd`/`dddd`：日、星期缩写、星期全称
/// - `M`/`MM`/`MMM`/`MMMM`：月、月份缩写、月份全称
/// - `y`/`yy`/`yyyy`：年
/// - `h`/`hh`：12 小时制，`H`/`HH`：24 小时制
/// - `m`/`mm`、`s`/`ss`：分、秒
/// - `f`..`fffffff`、`F`..`FFFFFFF`：小数秒
/// - `t`/`tt`：`A`/`P`、`AM`/`PM`
/// - `K`、`z`/`zz`/`zzz`：时区（UTC 固定为 `Z` 与 `+00:00`）
/// - `'...'`、`"..."`、`\c`：字面量
/// - `%c`：单个格式说明符
///
/// 单字符模式按标准格式说明符处理（`d`、`G`、`o`、`r`、`s`、`u` 等），
/// 空模式等同于 `G`。需要单个自定义说明符时使用 `%c`。
///
/// # 参数
///
/// * `pattern` - 格式模式。
/// * `instant` - 要格式化的时间点。
///
/// # 返回值
///
/// 格式化后的字符串。
///
/// # Errors
///
/// 当模式中存在未闭合的引号、过长的小数秒说明符、不完整的转义
/// 或未知的标准格式说明符时返回错误。
///
/// # 示例
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use stamp_writer::utils::date_format::format_utc;
///
/// let instant = Utc.with_ymd_and_hms(2024, 5, 1, 13, 30, 0).unwrap();
/// assert_eq!(format_utc("MM/dd/yyyy hh:mm:ss", &instant).unwrap(), "05/01/2024 01:30:00");
/// assert_eq!(format_utc("yyyy-MM-dd", &instant).unwrap(), "2024-05-01");
/// assert_eq!(format_utc("s", &instant).unwrap(), "2024-05-01T13:30:00");
/// ```
pub fn format_utc(pattern: &str, instant: &DateTime<Utc>) -> Result<String, FormatError> {
    let mut leading = pattern.chars();
    let chars: Vec<char> = match (leading.next(), leading.next()) {
        (None, _) => GENERAL_PATTERN.chars().collect(),
        (Some(specifier), None) => expand_standard(specifier)
            .ok_or(FormatError::UnknownStandardFormat(specifier))?
            .chars()
            .collect(),
        _ => pattern.chars().collect(),
    };

    let mut out = String::with_capacity(pattern.len() + 8);
    render(&chars, 0, instant, &mut out)?;
    Ok(out)
}

/// `offset` 是 `chars` 在原始模式中的起始位置，仅用于错误信息。
fn render(
    chars: &[char],
    offset: usize,
    instant: &DateTime<Utc>,
    out: &mut String,
) -> Result<(), FormatError> {
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        let consumed = match ch {
            'd' | 'M' | 'y' | 'h' | 'H' | 'm' | 's' | 'f' | 'F' | 't' | 'g' | 'z' => {
                let len = repeat_len(chars, i);
                render_field(ch, len, offset + i, instant, out)?;
                len
            }
            'K' => {
                out.push('Z');
                1
            }
            '\'' | '"' => parse_quoted(chars, i, offset, out)?,
            '\\' => match chars.get(i + 1) {
                Some(next) => {
                    out.push(*next);
                    2
                }
                None => return Err(FormatError::TrailingEscape),
            },
            '%' => match chars.get(i + 1) {
                Some('%') | None => return Err(FormatError::InvalidPercent(offset + i)),
                Some(_) => {
                    render(&chars[i + 1..i + 2], offset + i + 1, instant, out)?;
                    2
                }
            },
            other => {
                out.push(other);
                1
            }
        };
        i += consumed;
    }
    Ok(())
}

fn repeat_len(chars: &[char], start: usize) -> usize {
    let ch = chars[start];
    chars[start..].iter().take_while(|c| **c == ch).count()
}

fn render_field(
    ch: char,
    len: usize,
    position: usize,
    instant: &DateTime<Utc>,
    out: &mut String,
) -> Result<(), FormatError> {
    match ch {
        'd' => match len {
            1 | 2 => push_padded(out, instant.day() as i64, len),
            3 => out.push_str(&instant.format("%a").to_string()),
            _ => out.push_str(&instant.format("%A").to_string()),
        },
        'M' => match len {
            1 | 2 => push_padded(out, instant.month() as i64, len),
            3 => out.push_str(&instant.format("%b").to_string()),
            _ => out.push_str(&instant.format("%B").to_string()),
        },
        'y' => {
            let year = instant.year() as i64;
            if len <= 2 {
                push_padded(out, year % 100, len);
            } else {
                push_padded(out, year, len);
            }
        }
        'h' => {
            let hour = match instant.hour() % 12 {
                0 => 12,
                h => h,
            };
            push_padded(out, hour as i64, len.min(2));
        }
        'H' => push_padded(out, instant.hour() as i64, len.min(2)),
        'm' => push_padded(out, instant.minute() as i64, len.min(2)),
        's' => push_padded(out, instant.second() as i64, len.min(2)),
        'f' | 'F' => {
            if len > MAX_FRACTION_DIGITS {
                return Err(FormatError::FractionTooLong(position));
            }
            let digits = fraction_digits(instant, len);
            if ch == 'f' {
                out.push_str(&digits);
            } else {
                let trimmed = digits.trim_end_matches('0');
                if trimmed.is_empty() {
                    // 小数全为零时连同前面的小数点一起省略
                    if out.ends_with('.') {
                        out.pop();
                    }
                } else {
                    out.push_str(trimmed);
                }
            }
        }
        't' => {
            let pm = instant.hour() >= 12;
            match (len, pm) {
                (1, false) => out.push('A'),
                (1, true) => out.push('P'),
                (_, false) => out.push_str("AM"),
                (_, true) => out.push_str("PM"),
            }
        }
        'g' => out.push_str("A.D."),
        'z' => match len {
            1 => out.push_str("+0"),
            2 => out.push_str("+00"),
            _ => out.push_str("+00:00"),
        },
        _ => unreachable!("render_field called with non-field character {ch:?}"),
    }
    Ok(())
}

fn push_padded(out: &mut String, value: i64, width: usize) {
    out.push_str(&format!("{:0width$}", value, width = width));
}

/// 截断（不四舍五入）到指定位数的小数秒
fn fraction_digits(instant: &DateTime<Utc>, len: usize) -> String {
    // 闰秒时 nanosecond() 可能超过 10^9
    let nanos = instant.nanosecond() % 1_000_000_000;
    let value = nanos / 10u32.pow(9 - len as u32);
    format!("{:0len$}", value, len = len)
}

/// 解析引号中的字面量，返回消耗的字符数（包括两端引号）。
fn parse_quoted(
    chars: &[char],
    start: usize,
    offset: usize,
    out: &mut String,
) -> Result<usize, FormatError> {
    let quote = chars[start];
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            c if c == quote => return Ok(i - start + 1),
            '\\' => match chars.get(i + 1) {
                Some(next) => {
                    out.push(*next);
                    i += 2;
                }
                None => return Err(FormatError::TrailingEscape),
            },
            c => {
                out.push(c);
                i += 1;
            }
        }
    }
    Err(FormatError::UnterminatedQuote(offset + start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn afternoon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 13, 30, 5).unwrap()
    }

    /// 默认格式使用 12 小时制且不输出 AM/PM
    #[test]
    fn test_default_pattern_uses_twelve_hour_clock() {
        let result = format_utc("MM/dd/yyyy hh:mm:ss", &afternoon()).unwrap();
        assert_eq!(result, "05/01/2024 01:30:05");
    }

    #[test]
    fn test_midnight_renders_as_twelve() {
        let midnight = Utc.with_ymd_and_hms(2023, 12, 31, 0, 7, 9).unwrap();
        assert_eq!(format_utc("hh:mm:ss tt", &midnight).unwrap(), "12:07:09 AM");
        assert_eq!(format_utc("H:m:s t", &midnight).unwrap(), "0:7:9 A");
    }

    #[test]
    fn test_iso_like_pattern() {
        let result = format_utc("yyyy-MM-ddTHH:mm:ssK", &afternoon()).unwrap();
        assert_eq!(result, "2024-05-01T13:30:05Z");
    }

    #[test]
    fn test_names_and_short_years() {
        let result = format_utc("dddd, d MMMM yy (ddd MMM y)", &afternoon()).unwrap();
        assert_eq!(result, "Wednesday, 1 May 24 (Wed May 24)");

        let early = Utc.with_ymd_and_hms(2005, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_utc("y|yy|yyyyy", &early).unwrap(), "5|05|02005");
    }

    #[test]
    fn test_fraction_specifiers() {
        let instant = Utc
            .with_ymd_and_hms(2024, 5, 1, 13, 30, 5)
            .unwrap()
            .with_nanosecond(120_000_000)
            .unwrap();
        assert_eq!(format_utc("ss.fff", &instant).unwrap(), "05.120");
        assert_eq!(format_utc("ss.FFF", &instant).unwrap(), "05.12");
        assert_eq!(format_utc("ss.fffffff", &instant).unwrap(), "05.1200000");
    }

    /// 小数全为零时省略小数点
    #[test]
    fn test_zero_fraction_drops_decimal_point() {
        assert_eq!(format_utc("HH:mm:ss.FFF", &afternoon()).unwrap(), "13:30:05");
    }

    #[test]
    fn test_literals_and_escapes() {
        let result = format_utc(r#"'day' d "of" MMM \y\y yyyy %h"#, &afternoon()).unwrap();
        assert_eq!(result, "day 1 of May yy 2024 1");
        assert_eq!(format_utc("'it''s'", &afternoon()).unwrap(), "its");
        assert_eq!(format_utc(r"'a\'b'", &afternoon()).unwrap(), "a'b");
    }

    #[test]
    fn test_offsets_are_utc() {
        assert_eq!(format_utc("z|zz|zzz", &afternoon()).unwrap(), "+0|+00|+00:00");
    }

    #[test]
    fn test_invalid_patterns() {
        let instant = afternoon();
        assert_eq!(
            format_utc("yyyy 'open", &instant),
            Err(FormatError::UnterminatedQuote(5))
        );
        assert_eq!(
            format_utc("ss.ffffffff", &instant),
            Err(FormatError::FractionTooLong(3))
        );
        assert_eq!(format_utc("HH\\", &instant), Err(FormatError::TrailingEscape));
        assert_eq!(format_utc("HH%", &instant), Err(FormatError::InvalidPercent(2)));
        assert_eq!(format_utc("%%", &instant), Err(FormatError::InvalidPercent(0)));
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(format_utc("[ - ]", &afternoon()).unwrap(), "[ - ]");
    }

    /// 单字符模式按标准格式说明符处理
    #[test]
    fn test_single_character_standard_formats() {
        let instant = afternoon();
        assert_eq!(format_utc("o", &instant).unwrap(), "2024-05-01T13:30:05.0000000Z");
        assert_eq!(format_utc("s", &instant).unwrap(), "2024-05-01T13:30:05");
        assert_eq!(format_utc("u", &instant).unwrap(), "2024-05-01 13:30:05Z");
        assert_eq!(format_utc("d", &instant).unwrap(), "05/01/2024");
        assert_eq!(format_utc("R", &instant).unwrap(), "Wed, 01 May 2024 13:30:05 GMT");
        assert_eq!(format_utc("G", &instant).unwrap(), "05/01/2024 13:30:05");
        assert_eq!(format_utc("T", &instant).unwrap(), "13:30:05");
        assert_eq!(format_utc("m", &instant).unwrap(), "May 01");
        assert_eq!(format_utc("Y", &instant).unwrap(), "2024 May");
        assert_eq!(
            format_utc("F", &instant).unwrap(),
            "Wednesday, 01 May 2024 13:30:05"
        );
    }

    #[test]
    fn test_unknown_standard_format_is_rejected() {
        assert_eq!(
            format_utc("x", &afternoon()),
            Err(FormatError::UnknownStandardFormat('x'))
        );
        assert_eq!(
            format_utc("/", &afternoon()),
            Err(FormatError::UnknownStandardFormat('/'))
        );
    }

    /// `%c` 强制单个自定义说明符，空模式等同于 `G`
    #[test]
    fn test_percent_forces_custom_and_empty_is_general() {
        let instant = afternoon();
        assert_eq!(format_utc("%d", &instant).unwrap(), "1");
        assert_eq!(format_utc("%s", &instant).unwrap(), "5");
        assert_eq!(format_utc("", &instant).unwrap(), "05/01/2024 13:30:05");
    }
}
