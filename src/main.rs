use anyhow::{Context, Result};
use proc_access::{
    open_target, AccessToken, CurrentProcess, OpenOptions, ProcessAccess, ProcessId, TokenAccess,
};
use structopt::StructOpt;
use tracing::{info, Level};

#[derive(Debug, StructOpt)]
#[structopt(about = "Enable the debug privilege, then open a process by identifier")]
struct Opt {
    /// Identifier of the target process
    pid: ProcessId,

    /// Skip the privilege elevation step
    #[structopt(long)]
    no_elevate: bool,

    /// Request query-limited access instead of full access
    #[structopt(long)]
    query_only: bool,

    /// List the privileges held by this process afterwards
    #[structopt(long)]
    show_privileges: bool,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let opt = Opt::from_args();
    if let Err(err) = run(&opt) {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<()> {
    info!("proc-access v{}", env!("CARGO_PKG_VERSION"));

    let options = OpenOptions {
        access: if opt.query_only {
            ProcessAccess::QUERY_LIMITED_INFORMATION
        } else {
            ProcessAccess::ALL_ACCESS
        },
        elevate: !opt.no_elevate,
    };

    info!(
        "Opening process {} (elevate: {}, access: 0x{:X})",
        opt.pid,
        options.elevate,
        options.access.value()
    );

    let handle = open_target(opt.pid, &options)
        .with_context(|| format!("could not acquire a handle to process {}", opt.pid))?;

    info!("Target process handle = {}", handle);
    info!("Handle reports process identifier {}", handle.reported_pid()?);

    if opt.show_privileges {
        let token = AccessToken::open(&CurrentProcess::get(), TokenAccess::QUERY)?;
        for name in token.held_privileges()? {
            info!("Held privilege: {}", name);
        }
    }

    Ok(())
}
