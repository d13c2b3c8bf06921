pub mod database_variant;
pub mod input_variant;
pub mod mutation;
pub mod result_variant;

// re-export for cleaner imports
pub use self::database_variant::{
    ClinvarDb, ClinvarRecord, DatabaseVariant, SnpediaDb, SnpediaGenotype, SnpediaRecord,
    SnpediaTags, Source,
};
pub use self::input_variant::{InputVariant, VariantMap};
pub use self::mutation::Mutation;
pub use self::result_variant::{ResultVariant, Zygosity};
