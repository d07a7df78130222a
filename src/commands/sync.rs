use std::thread::JoinHandle;

use anyhow::Result;
use clasp_shell::domain::operation::Direction;
use clasp_shell::{ProcessTool, SyncInvoker};

use super::{GlobalArgs, Session};

/// `push` / `sync` without `--watch`
pub fn cmd_push(args: GlobalArgs) -> Result<bool> {
    run_once(args, |invoker| invoker.trigger(Direction::Push))
}

/// `pull` / `fetch`
pub fn cmd_pull(args: GlobalArgs) -> Result<bool> {
    run_once(args, |invoker| invoker.trigger(Direction::Pull))
}

/// Any other subcommand, forwarded verbatim
pub fn cmd_passthrough(args: GlobalArgs, tool_args: Vec<String>) -> Result<bool> {
    run_once(args, move |invoker| invoker.run_passthrough(tool_args))
}

/// Run a single invocation to completion; `Ok(false)` when it failed
fn run_once<F>(args: GlobalArgs, launch: F) -> Result<bool>
where
    F: FnOnce(&SyncInvoker<ProcessTool>) -> Option<JoinHandle<()>>,
{
    let session = Session::load(args)?;
    let (invoker, tracker) = session.invoker();

    if let Some(handle) = launch(&invoker) {
        if handle.join().is_err() {
            anyhow::bail!("invocation worker panicked");
        }
    }

    Ok(!tracker.any_failed())
}
