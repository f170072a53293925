mod handlers;

use anyhow::Result;
use clap::{Arg, Command, value_parser};

use vannot_core::client::DEFAULT_MYVARIANT_API;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "vannot";
    pub const BIN_NAME: &str = "vannot";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Annotates the leading records of a VCF file against MyVariant.info and reports summary statistics over the result.")
        .arg(
            Arg::new("vcf")
                .required(true)
                .help("Path to the VCF file (plain text or gzipped)"),
        )
        .arg(
            Arg::new("max-records")
                .long("max-records")
                .short('n')
                .value_parser(value_parser!(usize))
                .default_value("900")
                .help("Annotate at most this many leading records"),
        )
        .arg(
            Arg::new("build")
                .long("build")
                .short('b')
                .default_value("hg38")
                .help("Genome build for the annotation query (hg19 or hg38)"),
        )
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .default_value(DEFAULT_MYVARIANT_API)
                .help("Annotation endpoint URL"),
        )
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    handlers::run_annotate(&matches)
}
