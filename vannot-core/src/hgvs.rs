//! Genomic HGVS identifier construction.

use crate::vcf::VcfRecord;

/// Build the genomic-HGVS query identifier for one record:
/// `CHROM:g.POSREF>ALT`, using the first alternate allele.
///
/// The POS column is used as written (HGVS g. coordinates are 1-based,
/// like VCF).
pub fn genomic_hgvs(record: &VcfRecord) -> String {
    format!(
        "{}:g.{}{}>{}",
        record.chrom,
        record.pos,
        record.ref_allele,
        record.primary_alt()
    )
}
