//! システムフォント探索の Facade
//!
//! `TEXTBLOCK_FONT` が設定されていればそれを最優先し、
//! なければ OS ごとの候補から最初に見つかったファイルを使う。

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// フォントパスを上書きする環境変数
pub const FONT_ENV_VAR: &str = "TEXTBLOCK_FONT";

#[cfg(target_os = "linux")]
use crate::platform::os::linux;
#[cfg(target_os = "macos")]
use crate::platform::os::macos;
#[cfg(target_os = "windows")]
use crate::platform::os::windows;

#[allow(unreachable_code)]
pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    #[cfg(target_os = "linux")]
    {
        return linux::font::system_font_candidates();
    }
    #[cfg(target_os = "macos")]
    {
        return macos::font::system_font_candidates();
    }
    #[cfg(target_os = "windows")]
    {
        return windows::font::system_font_candidates();
    }

    anyhow::bail!("system font is not supported on this OS yet");
}

/// フォントを探してバイト列として読み込む
///
/// 候補が読めなかった場合は警告を出して次の候補へ進む。
pub fn load_font_bytes() -> Result<(PathBuf, Vec<u8>)> {
    if let Ok(p) = env::var(FONT_ENV_VAR)
        && !p.is_empty()
    {
        let bytes = std::fs::read(&p).with_context(|| format!("failed to read font file: {p}"))?;
        log::info!(target: "platform::font", "loaded {p} ({} bytes)", bytes.len());
        return Ok((PathBuf::from(p), bytes));
    }

    for path in system_font_candidates()? {
        if !path.is_file() {
            continue;
        }
        match std::fs::read(&path) {
            Ok(bytes) => {
                log::info!(target: "platform::font", "loaded {} ({} bytes)", path.display(), bytes.len());
                return Ok((path, bytes));
            }
            Err(e) => {
                log::warn!(target: "platform::font", "skipping {}: {e}", path.display());
            }
        }
    }

    anyhow::bail!("no system font found")
}
