//! Pointer to the vcf.iobio.io viewer for manual inspection.

/// vcf.iobio.io configured for the human genome, GRCh38 build.
pub const VIEWER_URL: &str = "https://vcf.iobio.io/?species=Human&build=GRCh38";

/// What the operator has to do before the viewer accepts the file.
/// (`bgzip -c file.vcf > file.vcf.gz && tabix -p vcf file.vcf.gz`)
pub const UPLOAD_HINT: &str =
    "Upload the bgzip-compressed VCF (.vcf.gz) together with its tabix index (.vcf.gz.tbi)";
