//! Parameter command parsing
//!
//! Commands are comma separated `key=value` lists, e.g.
//! `mode=1,brightness=180,flame_min=90`. Parsing runs on the sender side so
//! the render loop receives a whole command as one batch.

use crate::intent::{MAX_PARAM_UPDATES, ParamBatch};
use crate::params::{ParamKey, ParamUpdate};

/// Parse a parameter command
///
/// Unknown keys are skipped. A pair without `=` ends parsing, as does a full
/// batch.
pub fn parse_params(command: &str) -> ParamBatch {
    let mut batch = ParamBatch::new();
    for pair in command.split(',') {
        let Some((key, value)) = pair.split_once('=') else {
            break;
        };
        let Some(key) = ParamKey::parse_from_str(key.trim()) else {
            continue;
        };
        if batch.len() == MAX_PARAM_UPDATES {
            break;
        }
        let _ = batch.push(ParamUpdate {
            key,
            value: parse_int(value),
        });
    }
    batch
}

/// Leading decimal integer of `value`, 0 if there is none
///
/// Trailing garbage is ignored and out-of-range values saturate.
pub fn parse_int(value: &str) -> i32 {
    let value = value.trim_start();
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    let mut result: i32 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        result = result
            .saturating_mul(10)
            .saturating_add(i32::from(digit - b'0'));
    }
    if negative { -result } else { result }
}
