use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;

use vannot_core::annotation::GenomeBuild;
use vannot_core::client::MyVariantClient;
use vannot_core::hgvs::genomic_hgvs;
use vannot_core::summary;
use vannot_core::vcf::VcfReader;
use vannot_core::viewer::{UPLOAD_HINT, VIEWER_URL};

use crate::consts;

/// Execute one annotation run from the matched CLI args: read the leading
/// VCF records, annotate them in one batch, print the four summaries and
/// the viewer hint.
pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let vcf_path = matches
        .get_one::<String>("vcf")
        .expect("A VCF path is required");
    let max_records = *matches
        .get_one::<usize>("max-records")
        .expect("max-records has a default");
    let build: GenomeBuild = matches
        .get_one::<String>("build")
        .expect("build has a default")
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let api_url = matches
        .get_one::<String>("api-url")
        .expect("api-url has a default");

    println!("{} version: {}", consts::PKG_NAME, consts::VERSION);

    let reader = VcfReader::from_path(vcf_path, max_records)
        .with_context(|| format!("Failed to open VCF {}", vcf_path))?;
    let mut ids = Vec::new();
    for record in reader {
        let record = record?;
        ids.push(genomic_hgvs(&record));
    }

    let client = MyVariantClient::builder()
        .with_api_url(api_url.clone())
        .with_build(build)
        .finish();
    let entries = client
        .annotate(&ids)
        .with_context(|| format!("Annotating {} variants failed", ids.len()))?;

    let genes = summary::gene_names(&entries)?;
    let gene_list = genes
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    println!("Genes found ({}): {}", genes.len(), gene_list);
    println!(
        "Variants with putative impact MODIFIER: {}",
        summary::count_modifier_impact(&entries)
    );
    println!(
        "Variants with a mutationtaster annotation: {}",
        summary::count_mutationtaster(&entries)
    );
    println!(
        "Variants with consequence NON_SYNONYMOUS: {}",
        summary::count_non_synonymous(&entries)
    );

    println!("View the VCF at: {}", VIEWER_URL);
    println!("{}", UPLOAD_HINT);

    Ok(())
}
