use clap::{ArgGroup, arg};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitemapper")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitemapper")
        .about("Find a site's sitemap, follow its sitemap indexes and list what they contain")
        .styles(CLAP_STYLING)
        .arg(
            arg!(<DOMAIN>)
                .required(true)
                .help("Domain or URL of the site (https:// is assumed when no scheme is given)"),
        )
        .arg(arg!(--"main" "Print the location of the main sitemap"))
        .arg(arg!(--"subs" "Print every sub-sitemap referenced from the main sitemap"))
        .arg(arg!(--"urls" "Print every content URL listed in the sitemap tree"))
        .group(
            ArgGroup::new("mode")
                .args(["main", "subs", "urls"])
                .required(true)
                .multiple(false),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            arg!(-d --"max-depth" <DEPTH>)
                .required(false)
                .help("How many levels of nested sitemap indexes to follow")
                .value_parser(clap::value_parser!(usize))
                .default_value("8"),
        )
        .arg(
            arg!(-c --"concurrency" <NUM>)
                .required(false)
                .help("How many sibling sitemaps to fetch at once (output order is unaffected)")
                .value_parser(clap::value_parser!(usize))
                .default_value("1"),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Save report to file (default: print to stdout)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(arg!(-v --"verbose" "Show debug logging on stderr").required(false))
}
