mod cli;
mod dispatch;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use desk_reset_core::{
    adapter::{PermissionStatus, PlatformAdapter},
    error::AppError,
    output::{ErrorPayload, Response},
    CancelToken,
};
use std::io::{BufWriter, Write};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(c) => c,
        Err(e) => {
            if matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ) {
                e.exit();
            }
            let msg = e.to_string();
            let first_line = msg.lines().next().unwrap_or("parse error");
            emit_json(&Response::err("unknown", ErrorPayload::new("INVALID_ARGS", first_line)));
            std::process::exit(2);
        }
    };

    init_tracing(cli.verbose);

    let cmd = match cli.command {
        Some(c) => c,
        None => {
            Cli::command().print_help().unwrap_or(());
            std::process::exit(0);
        }
    };

    let cmd_name = cmd.name();
    let adapter = desk_reset_macos::MacOSAdapter::new();

    if !dispatch::is_session(&cmd) {
        let result = dispatch::dispatch(cmd, &adapter);
        finish(cmd_name, result.map(Some), true);
    }

    if let PermissionStatus::Denied { suggestion } = adapter.check_permissions() {
        tracing::warn!(%suggestion, "UI scripting may be unavailable; window steps can fail");
    }

    let cancel = CancelToken::new();
    if let Err(e) = cancel.cancel_on_interrupt() {
        tracing::warn!(error = %e, "Ctrl+C will terminate instead of cancelling");
    }
    let json = dispatch::wants_json(&cmd);
    let result = dispatch::run_session(cmd, &adapter, &cancel);
    finish(cmd_name, result, json);
}

fn finish(cmd_name: &str, result: Result<Option<serde_json::Value>, AppError>, json: bool) -> ! {
    match result {
        Ok(Some(data)) => {
            emit_json(&Response::ok(cmd_name, data));
            std::process::exit(0);
        }
        Ok(None) => std::process::exit(0),
        Err(e) => {
            if json {
                emit_json(&Response::err(cmd_name, ErrorPayload::from(&e)));
            } else {
                eprintln!("error: {e}");
                if let Some(s) = e.suggestion() {
                    eprintln!("hint: {s}");
                }
            }
            std::process::exit(1);
        }
    }
}

fn emit_json(value: &Response) {
    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    if serde_json::to_writer(&mut writer, value).is_err() {
        return;
    }
    let _ = writer.write_all(b"\n");
    let _ = writer.flush();
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let filter = if verbose { "debug" } else { "warn" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
