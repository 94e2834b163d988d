use log::debug;
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::error::ClientError;

pub const DOWNLOAD_FILENAME: &str = "summary.txt";

struct ClipboardCommand {
    program: &'static str,
    args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[ClipboardCommand {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "windows")]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[ClipboardCommand {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CLIPBOARD_COMMANDS: &[ClipboardCommand] = &[
    ClipboardCommand {
        program: "wl-copy",
        args: &[],
    },
    ClipboardCommand {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    ClipboardCommand {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

/// Write `summary` as `summary.txt` inside `dir`.
pub fn download_summary(summary: &str, dir: &Path) -> Result<PathBuf, ClientError> {
    let path = dir.join(DOWNLOAD_FILENAME);
    fs::write(&path, summary)?;
    Ok(path)
}

/// Put `text` on the system clipboard using the first clipboard tool that works.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClientError> {
    let mut last_error = String::from("no clipboard tool found");

    for command in CLIPBOARD_COMMANDS {
        match pipe_to(command.program, command.args, text) {
            Ok(()) => return Ok(()),
            Err(e) => {
                debug!("Clipboard tool {} failed: {}", command.program, e);
                last_error = format!("{}: {}", command.program, e);
            }
        }
    }

    Err(ClientError::Clipboard(last_error))
}

/// Copy and/or save `summary`. The file is still written when the copy
/// fails; the copy error is returned afterwards.
pub fn deliver_summary(
    summary: &str,
    copy: bool,
    download: Option<&Path>,
    copier: impl Fn(&str) -> Result<(), ClientError>,
) -> Result<Option<PathBuf>, ClientError> {
    let copied = if copy { copier(summary) } else { Ok(()) };

    let saved = match download {
        Some(dir) => Some(download_summary(summary, dir)?),
        None => None,
    };

    copied.map(|()| saved)
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("exited with {}", status)))
    }
}
