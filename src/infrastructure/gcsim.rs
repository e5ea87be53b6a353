//! gcsim child-process adapter
//!
//! Runs `gcsim -c <config> -out <result> -substatOptimFull`, echoing its
//! stdout line by line while it runs. Stdout is always read to EOF before
//! the process is reaped, and stderr is drained on a separate task, so a
//! chatty simulator can never block on a full pipe.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;
use tracing::debug;

use crate::application::ports::outbound::{
    SimulationExit, SimulationRequest, SimulationRun, SimulatorError, SimulatorPort,
};

/// Flag asking gcsim to optimize substats before simulating
pub const OPTIMIZE_FLAG: &str = "-substatOptimFull";

pub struct GcsimRunner {
    executable: PathBuf,
    completion_marker: String,
}

impl GcsimRunner {
    pub fn new(executable: impl Into<PathBuf>, completion_marker: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            completion_marker: completion_marker.into(),
        }
    }

    /// Command-line arguments for one request
    pub fn args(request: &SimulationRequest) -> Vec<OsString> {
        vec![
            "-c".into(),
            request.config.clone().into_os_string(),
            "-out".into(),
            request.result.clone().into_os_string(),
            OPTIMIZE_FLAG.into(),
        ]
    }
}

#[async_trait]
impl SimulatorPort for GcsimRunner {
    async fn run(&self, request: &SimulationRequest) -> Result<SimulationRun, SimulatorError> {
        let mut child = Command::new(&self.executable)
            .args(Self::args(request))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SimulatorError::Spawn {
                program: self.executable.display().to_string(),
                source,
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("simulator stdout was not captured"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| std::io::Error::other("simulator stderr was not captured"))?;

        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            stderr.read_to_end(&mut buf).await.map(|_| buf)
        });

        let mut reader = BufReader::new(stdout);
        let mut buf = Vec::new();
        let mut completion_seen = false;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\r', '\n']);
            println!("{line}");

            if !completion_seen && line.contains(&self.completion_marker) {
                completion_seen = true;
                debug!("Completion marker seen for {}", request.config.display());
            }
        }

        let status = child.wait().await?;
        let stderr = stderr_task.await.map_err(std::io::Error::other)??;

        let exit = if status.success() {
            SimulationExit::Success
        } else {
            SimulationExit::Failure {
                code: status.code(),
                stderr: String::from_utf8_lossy(&stderr).into_owned(),
            }
        };

        Ok(SimulationRun {
            exit,
            completion_seen,
        })
    }
}
