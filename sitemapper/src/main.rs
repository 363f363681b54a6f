use colored::Colorize;
use sitemapper::{ScanArgs, ScanStatus, command_argument_builder, handle_scan, init_tracing};
use sitemapper_core::print_banner;

#[tokio::main]
async fn main() {
    let matches = command_argument_builder().get_matches();

    let args = match ScanArgs::from_matches(&matches) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(2);
        }
    };

    init_tracing(args.verbose);

    if !args.quiet {
        print_banner();
    }

    match handle_scan(&args).await {
        Ok(ScanStatus::Completed) => {}
        Ok(ScanStatus::NotFound) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            std::process::exit(1);
        }
    }
}
