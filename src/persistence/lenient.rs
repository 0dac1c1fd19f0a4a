//! Lenient JSON pre-pass for hand-edited configs
//!
//! Blanks out what strict JSON rejects but people write anyway: `//` and `#`
//! line comments, `/* */` block comments, trailing commas and a leading BOM.
//! Removed characters become spaces and newlines are kept, so parser errors
//! still point at the right line and column.

/// Rewrite `input` into strict JSON, leaving string contents untouched
pub fn strip_lenient(input: &str) -> String {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut chars: Vec<char> = input.chars().collect();
    blank_comments(&mut chars);
    blank_trailing_commas(&mut chars);
    chars.into_iter().collect()
}

fn blank_comments(chars: &mut [char]) {
    let mut in_string = false;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if in_string {
            match c {
                '\\' => i += 1,
                '"' => in_string = false,
                _ => {}
            }
            i += 1;
            continue;
        }

        match (c, chars.get(i + 1).copied()) {
            ('"', _) => {
                in_string = true;
                i += 1;
            }
            ('#', _) | ('/', Some('/')) => {
                while i < chars.len() && chars[i] != '\n' {
                    chars[i] = ' ';
                    i += 1;
                }
            }
            ('/', Some('*')) => {
                chars[i] = ' ';
                chars[i + 1] = ' ';
                i += 2;
                while i < chars.len() {
                    if chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
                        chars[i] = ' ';
                        chars[i + 1] = ' ';
                        i += 2;
                        break;
                    }
                    if chars[i] != '\n' {
                        chars[i] = ' ';
                    }
                    i += 1;
                }
            }
            _ => i += 1,
        }
    }
}

fn blank_trailing_commas(chars: &mut [char]) {
    let mut in_string = false;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if in_string {
            match c {
                '\\' => i += 1,
                '"' => in_string = false,
                _ => {}
            }
        } else if c == '"' {
            in_string = true;
        } else if c == ',' {
            let next = chars[i + 1..].iter().copied().find(|c| !c.is_whitespace());
            if matches!(next, Some('}') | Some(']')) {
                chars[i] = ' ';
            }
        }
        i += 1;
    }
}
