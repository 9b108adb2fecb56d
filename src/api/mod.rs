//! Resource-scoped views over [`BangumiClient`](crate::BangumiClient).
//!
//! Each view borrows the client and pre-fills the path identifier it was created with.

mod characters;
mod collections;
mod episodes;
mod indices;
mod persons;
mod revisions;
mod search;
mod subjects;
mod users;

pub use characters::CharacterApi;
pub use collections::CollectionsApi;
pub use episodes::EpisodesApi;
pub use indices::{IndexApi, IndicesApi};
pub use persons::PersonApi;
pub use revisions::{RevisionApi, RevisionsApi};
pub use search::SearchApi;
pub use subjects::SubjectApi;
pub use users::UserApi;
