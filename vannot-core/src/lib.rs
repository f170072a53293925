//! # Batch VCF variant annotation via MyVariant.info
//!
//! This crate reads the leading records of a VCF file, builds one
//! genomic-HGVS identifier per record, annotates the whole batch with a
//! single POST to the MyVariant.info API, and derives summary statistics
//! over the decoded response. It provides:
//!
//! - a capped, lazily-iterating VCF reader (plain or gzipped input)
//! - genomic-HGVS identifier construction (`CHROM:g.POSREF>ALT`)
//! - a blocking MyVariant.info batch client
//! - summary passes (gene names, impact/consequence/predictor counts)
//! - the vcf.iobio.io viewer hint for manual inspection

pub mod annotation;
pub mod client;
pub mod errors;
pub mod hgvs;
pub mod summary;
pub mod vcf;
pub mod viewer;

pub use annotation::{AnnotationEntry, GenomeBuild};
pub use client::{DEFAULT_MYVARIANT_API, MAX_BATCH_IDS, MyVariantClient, MyVariantClientBuilder};
pub use errors::AnnotateError;
pub use hgvs::genomic_hgvs;
pub use vcf::{VcfReader, VcfRecord};
