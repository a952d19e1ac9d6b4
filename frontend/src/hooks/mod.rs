pub mod use_collection;
pub mod use_draft;
pub mod use_session;

pub use use_collection::{use_collection, FetchStatus, UseCollectionHandle};
pub use use_draft::{use_draft, DraftState, UseDraftHandle};
pub use use_session::{use_require_session, use_session, use_session_expired};
