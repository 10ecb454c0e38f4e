use crate::config::Config;
use itertools::Itertools;
use std::ffi::OsString;
use std::io::{self};
use std::process::{Command, Output, Stdio};

pub const ANALYZER: &str = "slither";

#[cfg_attr(test, mockall::automock)]
pub trait Runner {
    fn run(&self) -> io::Result<Output>;
}

/// `slither <target> --print <selectors>`, run directly without a shell.
pub struct SlitherCommand {
    args: Vec<OsString>,
}

impl SlitherCommand {
    pub fn new(config: &Config) -> SlitherCommand {
        let mut args = vec![config.target_file.clone().into_os_string()];
        let printers = config.selectors.iter().unique().join(",");
        if !printers.is_empty() {
            args.push(OsString::from("--print"));
            args.push(OsString::from(printers));
        }
        return SlitherCommand { args };
    }

    pub fn args(&self) -> &[OsString] {
        return &self.args;
    }

    pub fn command_line(&self) -> String {
        let args = self.args().iter().map(|a| a.to_string_lossy()).join(" ");
        return format!("{} {}", ANALYZER, args);
    }
}

impl Runner for SlitherCommand {
    fn run(&self) -> io::Result<Output> {
        return Command::new(ANALYZER)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();
    }
}
