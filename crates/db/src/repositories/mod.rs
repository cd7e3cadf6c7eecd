//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&mut PgConnection` as the first argument, so a handler can
//! run all of its statements on the single connection it checked out.

pub mod brand_repo;
pub mod category_repo;
pub mod note_repo;
pub mod parfum_repo;
pub mod stats_repo;

pub use brand_repo::BrandRepo;
pub use category_repo::CategoryRepo;
pub use note_repo::NoteRepo;
pub use parfum_repo::ParfumRepo;
pub use stats_repo::StatsRepo;
