//! Hand a finished package to a spreadsheet viewer

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{Level, Log};

use crate::logging::emit;

/// Program used to open a package
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewerCommand {
    /// Whatever the desktop associates with `.xlsx` files
    #[default]
    SystemDefault,
    /// An explicit program; the package path is appended after `args`
    Program {
        /// Executable to run
        program: PathBuf,
        /// Arguments placed before the package path
        args: Vec<OsString>,
    },
}

impl ViewerCommand {
    /// Run `program` with the package path as its only argument
    pub fn program<P: Into<PathBuf>>(program: P) -> Self {
        ViewerCommand::Program {
            program: program.into(),
            args: Vec::new(),
        }
    }

    fn command(&self, path: &Path) -> Command {
        match self {
            ViewerCommand::SystemDefault => system_opener(path),
            ViewerCommand::Program { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args).arg(path);
                cmd
            }
        }
    }
}

#[cfg(target_os = "windows")]
fn system_opener(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn system_opener(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn system_opener(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

/// Launch a viewer on `path` without waiting for it to exit
///
/// Returns `false` and logs the failure through `logger` when the viewer
/// cannot be started; never panics or propagates the error.
pub fn open_in_viewer(path: &Path, viewer: &ViewerCommand, logger: &dyn Log) -> bool {
    let mut cmd = viewer.command(path);
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    match cmd.spawn() {
        Ok(child) => {
            emit(
                logger,
                Level::Info,
                format_args!("Opened {} in viewer (pid {})", path.display(), child.id()),
            );
            true
        }
        Err(err) => {
            emit(
                logger,
                Level::Error,
                format_args!(
                    "Error opening {} with {:?}: {}",
                    path.display(),
                    cmd.get_program(),
                    err
                ),
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLogger;

    #[test]
    fn test_missing_program_logs_error() {
        let logger = MemoryLogger::new();
        let viewer = ViewerCommand::program("/nonexistent/sheetpack-viewer");

        assert!(!open_in_viewer(Path::new("report.xlsx"), &viewer, &logger));
        let messages = logger.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].0, Level::Error);
        assert!(messages[0].1.contains("report.xlsx"));
    }

    #[test]
    fn test_program_arguments() {
        let viewer = ViewerCommand::Program {
            program: PathBuf::from("viewer"),
            args: vec![OsString::from("--readonly")],
        };
        let cmd = viewer.command(Path::new("out.xlsx"));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec!["--readonly", "out.xlsx"]);
    }
}
