use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnnotateError {
    #[error("Can't read VCF file: {0}")]
    FileAccess(String),

    #[error("Malformed VCF input: {0}")]
    VcfFormat(String),

    #[error("No variant identifiers to annotate")]
    EmptyBatch,

    #[error("Batch of {0} identifiers exceeds the service limit of {1}")]
    BatchTooLarge(usize, usize),

    #[error("Annotation request failed: {0}")]
    Network(String),

    #[error("Can't decode annotation response: {0}")]
    Decode(String),

    #[error("Annotation entry is missing expected field: {0}")]
    MissingField(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
