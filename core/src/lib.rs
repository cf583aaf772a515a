pub mod config;
pub mod contact;
pub mod error;
pub mod nav;
pub mod preference;
pub mod reveal;
pub mod scroll_spy;
pub mod scroll_top;
pub mod theme;
pub mod typing;

pub use contact::{ContactReply, FormMethod, SubmitGate, SubmitOutcome};
pub use error::{StorageError, SubmitError};
pub use nav::{fragment_id, NavState};
pub use preference::{KeyValueStore, MemoryStore, PreferenceStore};
pub use reveal::{RevealKind, RevealSet};
pub use scroll_spy::{FocusBand, LinkUpdate, ScrollSpy};
pub use scroll_top::ScrollTopButton;
pub use theme::{ThemeControlView, ThemePreference};
pub use typing::{Direction, TypingAnimator, TypingDelays, TypingStep};
