// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Console prompt helpers.

use std::io::Write;

/// Prints a prompt and reads one line from standard input.
///
/// The trailing line break is stripped; interior whitespace is kept so
/// free-text fields pass through unchanged. Returns `None` on end of
/// input.
pub fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = std::io::stdout().flush();

    let mut line: String = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            while line.ends_with('\n') || line.ends_with('\r') {
                line.pop();
            }
            Some(line)
        }
    }
}

/// Parses a menu choice or index token strictly.
///
/// The first whitespace-separated token must be an optionally-signed
/// run of digits; anything else is rejected. The rest of the line is
/// discarded, matching how the console historically consumed input.
#[must_use]
pub fn parse_strict_int(line: &str) -> Option<i64> {
    let token: &str = line.split_whitespace().next()?;

    let digits: &str = token.strip_prefix('-').unwrap_or(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    token.parse().ok()
}

/// Prompts until the line parses as a strict integer.
///
/// Invalid input re-prompts with an error line. Returns `None` on end
/// of input.
pub fn read_int(prompt: &str) -> Option<i64> {
    loop {
        let line: String = read_line(prompt)?;
        match parse_strict_int(&line) {
            Some(value) => return Some(value),
            None => println!("Input error: expected a whole number."),
        }
    }
}
