/// Decodes the HTML character references that reach chart sublabels from
/// server-rendered fragments: the common named set plus decimal and hex
/// numeric forms. Anything unrecognized or malformed passes through
/// verbatim.
pub fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match decode_one(tail) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

// Longest reference we accept between '&' and ';'.
const MAX_BODY: usize = 10;

fn decode_one(s: &str) -> Option<(char, usize)> {
    let semi = s[1..].find(';')?;
    if semi == 0 || semi > MAX_BODY {
        return None;
    }
    let body = &s[1..1 + semi];
    let ch = if let Some(num) = body.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            num.parse::<u32>().ok()?
        };
        char::from_u32(code)?
    } else {
        match body {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            "nbsp" => '\u{a0}',
            _ => return None,
        }
    };
    Some((ch, semi + 2))
}
