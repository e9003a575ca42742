/// HTML 扫描器 —— 找出开始标签里的 class="..." 属性，
/// 把属性值交给 `rewrite` 改写后原位写回。
///
/// 使用简单的状态机解析，避免引入 HTML 解析器依赖：
/// - 只在 `<字母` 开头的标签内部识别属性，文本内容原样保留
/// - 其它属性的引号值整体跳过，值里出现的 `class=` 不会被匹配
/// - 注释、`<script>` / `<style>` 的内容原样保留
/// - 支持双引号和单引号，写回时沿用原引号；无引号的 class 值原样保留
pub fn rewrite_class_attrs<F>(source: &str, mut rewrite: F) -> String
where
    F: FnMut(&str) -> String,
{
    let bytes = source.as_bytes();
    let len = bytes.len();
    let mut out = Output {
        result: String::with_capacity(len),
        copied: 0,
    };
    let mut i = 0;

    // 所有分界都是 ASCII 字节，切片位置总在字符边界上
    while i < len {
        if bytes[i] != b'<' {
            i += 1;
            continue;
        }

        // 注释整体跳过
        if bytes[i..].starts_with(b"<!--") {
            i = source[i + 4..].find("-->").map_or(len, |end| i + 4 + end + 3);
            continue;
        }

        // 只有 <字母 才是开始标签
        if !bytes.get(i + 1).is_some_and(u8::is_ascii_alphabetic) {
            i += 1;
            continue;
        }

        let (end, tag_name) = scan_tag(source, i + 1, &mut out, &mut rewrite);
        i = end;

        if tag_name.eq_ignore_ascii_case("script") || tag_name.eq_ignore_ascii_case("style") {
            i = skip_raw_text(source, i, tag_name);
        }
    }

    out.result.push_str(&source[out.copied..]);
    out.result
}

/// 输出缓冲：`source[copied..]` 尚未写入 `result`
struct Output {
    result: String,
    copied: usize,
}

/// 扫描一个开始标签（从标签名开始），返回标签结束后的位置和标签名
fn scan_tag<'a, F>(
    source: &'a str,
    start: usize,
    out: &mut Output,
    rewrite: &mut F,
) -> (usize, &'a str)
where
    F: FnMut(&str) -> String,
{
    let bytes = source.as_bytes();
    let len = bytes.len();

    let mut i = start;
    while i < len && !is_name_end(bytes[i]) {
        i += 1;
    }
    let tag_name = &source[start..i];

    loop {
        // 属性之间的空白和 /
        while i < len && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        if i >= len {
            return (len, tag_name);
        }
        if bytes[i] == b'>' {
            return (i + 1, tag_name);
        }

        let name_start = i;
        while i < len && !is_name_end(bytes[i]) && bytes[i] != b'=' {
            i += 1;
        }
        let name = &source[name_start..i];

        let mut j = skip_whitespace(bytes, i);
        if j >= len || bytes[j] != b'=' {
            // 无值属性
            i = j;
            continue;
        }
        j = skip_whitespace(bytes, j + 1);
        if j >= len {
            return (len, tag_name);
        }

        let quote = bytes[j];
        if quote != b'"' && quote != b'\'' {
            // 无引号值，原样保留
            while j < len && !bytes[j].is_ascii_whitespace() && bytes[j] != b'>' {
                j += 1;
            }
            i = j;
            continue;
        }

        let value_start = j + 1;
        let Some(value_end) = find_byte(bytes, value_start, quote) else {
            // 引号未闭合，剩余部分原样输出
            return (len, tag_name);
        };

        if name.eq_ignore_ascii_case("class") {
            let new_class = rewrite(&source[value_start..value_end]);
            out.result.push_str(&source[out.copied..name_start]);
            out.result.push_str(name);
            out.result.push('=');
            out.result.push(quote as char);
            out.result.push_str(&new_class);
            out.result.push(quote as char);
            out.copied = value_end + 1;
        }
        i = value_end + 1;
    }
}

/// 跳过 script / style 的原始文本，停在结束标签的 `<` 处
fn skip_raw_text(source: &str, start: usize, tag_name: &str) -> usize {
    let closing = format!("</{}", tag_name.to_ascii_lowercase());
    source[start..]
        .to_ascii_lowercase()
        .find(&closing)
        .map_or(source.len(), |pos| start + pos)
}

fn is_name_end(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'>' || byte == b'/'
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

fn find_byte(bytes: &[u8], start: usize, needle: u8) -> Option<usize> {
    bytes[start..]
        .iter()
        .position(|&byte| byte == needle)
        .map(|pos| start + pos)
}
