use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

use unishell_core::{Command, Error, ErrorKind, ExecutionContext, ExecutionResult, Value, ast};

use crate::args;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Displays file status as `Field: value` lines.
///
/// Syntax: `stat path`.
pub(crate) struct StatCommand;

impl Command for StatCommand {
    fn invoke(
        &self,
        args: Vec<Value>,
        _flags: &[ast::Flag],
        context: &mut ExecutionContext,
    ) -> Result<ExecutionResult, Error> {
        args::expect_count("stat", &args, 1..=1)?;

        let path = context.absolute_path(args::path("stat", &args[0])?);
        let metadata = std::fs::metadata(&path).map_err(|e| ErrorKind::PathIo(path.clone(), e))?;

        let lines = file_info(&path, &metadata)
            .into_iter()
            .map(|(field, value)| Value::String(format!("{field}: {value}")))
            .collect();

        Ok(Value::List(lines).into())
    }

    fn description(&self) -> &str {
        "Display file status"
    }
}

fn file_info(path: &Path, metadata: &Metadata) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        (
            "Name",
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        ),
        (
            "Directory",
            path.parent()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default(),
        ),
        ("Size", metadata.len().to_string()),
    ];

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        fields.push(("Mode", format!("0x{:X}", metadata.mode())));
        fields.push(("Inode", metadata.ino().to_string()));
        fields.push(("Links", metadata.nlink().to_string()));
    }

    fields.push(("Accessed", format_time(metadata.accessed())));
    fields.push(("Modified", format_time(metadata.modified())));
    fields.push(("Created", format_time(metadata.created())));

    fields
}

fn format_time(time: std::io::Result<SystemTime>) -> String {
    match time {
        Ok(time) => chrono::DateTime::<chrono::Local>::from(time)
            .format(TIME_FORMAT)
            .to_string(),
        Err(_) => String::from("unavailable"),
    }
}
