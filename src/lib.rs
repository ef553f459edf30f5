use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod canon;
pub use canon::*;

mod generate;
pub use generate::*;

mod intern;
pub use intern::*;

mod render;
pub use render::*;

mod table;
pub use table::*;

mod vocab;
pub use vocab::*;

/// What a ring position has been resolved to so far.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    /// Nothing decided yet; the position renders as its bare token.
    None,
    /// Attachment marker capped with an explicit hydrogen.
    Hydrogen,
    /// Attachment marker left open for a later substituent.
    Open,
    /// Attachment marker resolved to a concrete catalog substituent.
    Substituent(Name),
}

/// One ring slot: an atom token plus its current tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub token: Token,
    pub tag: Tag,
}

impl Position {
    pub fn untagged(token: Token) -> Self {
        Position {
            token,
            tag: Tag::None,
        }
    }
}

/// The four non-center ring slots, before the ring is closed.
pub type Skeleton = Vec<Token>;
/// A center token followed by its skeleton, all five ring slots.
pub type Core = Vec<Token>;
/// A full ring of tagged positions (a mask or a final pattern).
pub type TaggedPattern = Vec<Position>;

/// Initializes the global tracing subscriber at the given level.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init_logging(level: &str) {
    let level: Level = level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
