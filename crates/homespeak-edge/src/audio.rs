//! Audio post-processing: ID3v2 tag stripping and the external mp3 -> wav
//! converter.

use async_trait::async_trait;
use homespeak_tts::{AudioConverter, AudioContainer, TtsError, TtsResult};
use log::debug;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Strip a leading ID3v2 tag from an MP3 buffer.
///
/// Some media players reject MP3 streams that open with an ID3v2 block, so
/// this runs on every synthesis result regardless of the requested output
/// format. The tag length is a 4-byte synchsafe integer at offset 6 (only
/// the low 7 bits of each byte carry data), plus the 10-byte header.
/// Anything that does not look like a complete tag is returned unchanged.
pub fn strip_id3v2(data: &[u8]) -> &[u8] {
    if data.len() < 10 || &data[..3] != b"ID3" {
        return data;
    }
    let size = data[6..10]
        .iter()
        .fold(0usize, |acc, byte| (acc << 7) | (byte & 0x7F) as usize);
    let total = 10 + size;
    if total < data.len() {
        &data[total..]
    } else {
        data
    }
}

fn find_in_path(bin: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(bin))
        .find(|candidate| candidate.exists())
}

/// Container converter backed by the `ffmpeg` binary on `PATH`
pub struct FfmpegConverter {
    binary: Option<PathBuf>,
}

impl FfmpegConverter {
    pub fn new() -> Self {
        let binary = find_in_path("ffmpeg");
        if let Some(ref bin) = binary {
            debug!("Using audio converter at {}", bin.display());
        }
        Self { binary }
    }
}

impl Default for FfmpegConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioConverter for FfmpegConverter {
    async fn convert(
        &self,
        input: AudioContainer,
        bytes: Vec<u8>,
        output: AudioContainer,
    ) -> TtsResult<Vec<u8>> {
        let Some(binary) = &self.binary else {
            return Err(TtsError::ConversionFailed(
                "ffmpeg not found on PATH".to_string(),
            ));
        };

        let mut child = Command::new(binary)
            .arg("-hide_banner")
            .arg("-loglevel")
            .arg("error")
            .arg("-f")
            .arg(input.as_str())
            .arg("-i")
            .arg("pipe:0")
            .arg("-f")
            .arg(output.as_str())
            .arg("pipe:1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Dropping stdin after the write signals EOF to the converter.
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(&bytes).await?;
        }

        let result = child.wait_with_output().await?;
        if !result.status.success() {
            return Err(TtsError::ConversionFailed(
                String::from_utf8_lossy(&result.stderr).trim().to_string(),
            ));
        }

        debug!(
            "Converted {} bytes of {} into {} bytes of {}",
            bytes.len(),
            input,
            result.stdout.len(),
            output
        );
        Ok(result.stdout)
    }
}
