//! Keepsake is the headless core of a scroll-driven interactive greeting
//! page: content tables, interaction state machines, and the geometry of the
//! scroll-synchronized timeline path. Rendering belongs to the host; this
//! crate computes what to draw and how far along everything is.
#![forbid(unsafe_code)]

pub mod carousel;
pub mod collage;
pub mod content;
pub mod controls;
pub mod core;
pub mod elapsed;
pub mod error;
pub mod journey;
pub mod scroll;
pub mod session;
pub mod timeline;

pub use crate::carousel::LoopingCarousel;
pub use crate::collage::CollagePlan;
pub use crate::content::Greeting;
pub use crate::core::{BezPath, Point, Rect, Vec2, Viewport};
pub use crate::elapsed::{ElapsedBreakdown, RelationshipClock};
pub use crate::error::{KeepsakeError, KeepsakeResult};
pub use crate::journey::Journey;
pub use crate::scroll::{ProgressSpan, ScrollTriggers};
pub use crate::session::{GreetingSession, StartEffects};
pub use crate::timeline::{
    AnchorProbe, AnchorRef, RecomputeOutcome, RevealProgress, TimelinePath,
};
