//! Kinetic component catalog
//!
//! Ready-made animated components on top of `kinetic_animation`. Each
//! component owns its keyframe set, trigger state, and animation
//! context; the host feeds it [`InputEvent`]s and one `update(dt)` per
//! frame, then reads the resolved style back out to paint.
//!
//! [`InputEvent`]: kinetic_core::events::InputEvent

pub mod accordion;
pub mod button;
pub mod card;
pub mod fade;
pub mod landing;
pub mod list;
pub mod magnetic;
pub mod modal;
pub mod reveal;
pub mod spinner;
pub mod toggle;

pub use accordion::Accordion;
pub use button::ScaleButton;
pub use card::HoverCard;
pub use fade::FadeUp;
pub use landing::LandingPage;
pub use list::StaggeredList;
pub use magnetic::MagneticButton;
pub use modal::Modal;
pub use reveal::ScrollReveal;
pub use spinner::Spinner;
pub use toggle::Toggle;

pub mod prelude {
    pub use crate::{
        Accordion, FadeUp, HoverCard, LandingPage, MagneticButton, Modal, ScaleButton,
        ScrollReveal, Spinner, StaggeredList, Toggle,
    };
    pub use kinetic_animation::{ResolvedStyle, SlideDirection};
    pub use kinetic_core::events::InputEvent;
}
