mod cli;
mod config;
mod diag;
mod errors;
mod matcher;
mod nav;
mod render;
mod util;

use clap::Parser;
use cli::Args;
use config::Settings;
use errors::AppError;
use matcher::MatchSpec;
use nav::{build_nav, BuildOptions};
use std::io::{self, BufWriter, Write};
use std::process;

fn main() {
    let args = Args::parse();
    diag::set_quiet(args.quiet);

    if let Err(e) = run(&args) {
        eprintln!("docnav: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let file_config = config::locate(args)?;
    let settings = Settings::resolve(args, file_config);

    let spec = MatchSpec::from_settings(&settings);
    let options = BuildOptions {
        strip_suffix: settings.strip_suffix.clone(),
        include_hidden: settings.include_hidden,
        display_root: settings.display_root.clone(),
    };

    let root_node = build_nav(&settings.root, &spec, &options)?;
    if root_node.file_count() == 0 {
        diag::warn(format!(
            "No files found under {}; has the docs generator run?",
            settings.root.display()
        ));
    }

    let renderer = render::create_renderer(&settings);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match renderer
        .write_tree(&root_node, &mut out)
        .and_then(|_| out.flush())
    {
        // Piped into `head` or similar
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(AppError::from),
    }
}
