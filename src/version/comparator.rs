//! Component-wise comparison of normalized versions

use std::cmp::Ordering;

use crate::version::error::CompareError;

/// Digit runs with leading zeros removed, so `"007"` and `"7"` compare equal
fn parse_components(version: &str) -> Result<Vec<&str>, CompareError> {
    version
        .split('.')
        .map(|part| {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(CompareError::InvalidComponent(part.to_string()));
            }
            let trimmed = part.trim_start_matches('0');
            Ok(if trimmed.is_empty() { "0" } else { trimmed })
        })
        .collect()
}

/// Numeric order of two zero-trimmed digit runs of any length
fn compare_components(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Decide whether `local` is behind `remote`.
///
/// Components are compared left to right for as many positions as `remote`
/// has. The first smaller local component means an update is needed, the
/// first larger one means the local build is ahead. Equal through the end of
/// `remote` means no update, so extra trailing local components are ignored
/// (`1.0.0.5` vs `1.0.0` is up to date). Components may be arbitrarily long.
///
/// Reaching a position that `local` does not have is a contract violation and
/// fails with [`CompareError::LocalTooShort`] instead of guessing a value.
/// Deciding before that position is fine: `1.0` vs `2.0.1` needs an update.
pub fn is_update_required(local: &str, remote: &str) -> Result<bool, CompareError> {
    let local_parts = parse_components(local)?;
    let remote_parts = parse_components(remote)?;

    for (index, remote_part) in remote_parts.iter().enumerate() {
        let Some(local_part) = local_parts.get(index) else {
            return Err(CompareError::LocalTooShort {
                local: local.to_string(),
                remote: remote.to_string(),
            });
        };

        match compare_components(local_part, remote_part) {
            Ordering::Less => return Ok(true),
            Ordering::Greater => return Ok(false),
            Ordering::Equal => {}
        }
    }

    Ok(false)
}
